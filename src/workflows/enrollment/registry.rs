use super::domain::{
    AttendanceOutcome, Enrollment, RegistryError, TraineeId, TraineeRecord, ValidationError,
};
use tracing::{debug, info, warn};

/// In-memory trainee table for one application session.
///
/// Records keep their insertion order and nothing is unique: the same name or
/// email may be enrolled any number of times.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    records: Vec<TraineeRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_records(records: Vec<TraineeRecord>) -> Self {
        Self { records }
    }

    /// Validate and append a new trainee with no lectures attended.
    pub fn enroll(&mut self, enrollment: Enrollment) -> Result<TraineeId, ValidationError> {
        if enrollment.name.is_empty() || enrollment.email.is_empty() {
            warn!("enrollment rejected: name and email are required");
            return Err(ValidationError::MissingNameOrEmail);
        }
        if enrollment.total_lectures == 0 {
            warn!(name = %enrollment.name, "enrollment rejected: program has no lectures");
            return Err(ValidationError::NoLectures);
        }

        let id = TraineeId(self.records.len());
        let record = TraineeRecord::from_enrollment(enrollment);
        info!(
            %id,
            name = %record.name,
            field = %record.field_of_study,
            round = %record.round,
            total_lectures = record.total_lectures(),
            "trainee enrolled"
        );
        self.records.push(record);
        Ok(id)
    }

    /// Mark one lecture attended. A trainee already at the total is left
    /// untouched and reported as complete.
    pub fn mark_attendance(&mut self, id: TraineeId) -> Result<AttendanceOutcome, RegistryError> {
        let record = self
            .records
            .get_mut(id.0)
            .ok_or(RegistryError::UnknownTrainee(id))?;

        let outcome = record.record_lecture();
        match outcome {
            AttendanceOutcome::Recorded {
                lectures_attended,
                lectures_remaining,
            } => info!(
                %id,
                lectures_attended,
                lectures_remaining,
                "attendance recorded"
            ),
            AttendanceOutcome::AlreadyComplete { total_lectures } => {
                info!(%id, total_lectures, "trainee already completed all lectures")
            }
        }

        Ok(outcome)
    }

    pub fn list_all(&self) -> &[TraineeRecord] {
        &self.records
    }

    pub fn get(&self, id: TraineeId) -> Option<&TraineeRecord> {
        self.records.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TraineeId, &TraineeRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (TraineeId(index), record))
    }

    pub fn display_label(&self, id: TraineeId) -> Option<String> {
        self.get(id).map(TraineeRecord::display_label)
    }

    /// Entries for the attendance selector, in enrollment order.
    pub fn attendance_choices(&self) -> Vec<(TraineeId, String)> {
        self.iter()
            .map(|(id, record)| (id, record.display_label()))
            .collect()
    }

    /// Trainees whose field of study and round both match exactly.
    ///
    /// Matching is case-sensitive and does not trim, so "AI " and "ai" do not
    /// match "AI".
    pub fn find_by_field_and_round(&self, field_of_study: &str, round: &str) -> Vec<&TraineeRecord> {
        let matches: Vec<&TraineeRecord> = self
            .records
            .iter()
            .filter(|record| record.field_of_study == field_of_study && record.round == round)
            .collect();
        debug!(
            field = field_of_study,
            round,
            matches = matches.len(),
            "roster lookup"
        );
        matches
    }
}

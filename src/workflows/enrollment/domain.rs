use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a trainee inside the registry, assigned at enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraineeId(pub usize);

impl fmt::Display for TraineeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the enroll form collects for a new trainee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub field_of_study: String,
    pub round: String,
    pub enrollment_date: NaiveDate,
    pub graduation_date: NaiveDate,
    pub total_lectures: u32,
}

/// A single enrolled trainee and their attendance progress.
///
/// Only the attended count is stored; the remaining count is derived from it so
/// the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraineeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub field_of_study: String,
    pub round: String,
    pub enrollment_date: NaiveDate,
    pub graduation_date: NaiveDate,
    total_lectures: u32,
    lectures_attended: u32,
}

impl TraineeRecord {
    pub(crate) fn from_enrollment(enrollment: Enrollment) -> Self {
        let Enrollment {
            name,
            email,
            phone,
            field_of_study,
            round,
            enrollment_date,
            graduation_date,
            total_lectures,
        } = enrollment;

        Self {
            name,
            email,
            phone,
            field_of_study,
            round,
            enrollment_date,
            graduation_date,
            total_lectures,
            lectures_attended: 0,
        }
    }

    /// Rebuilds a record with existing progress, e.g. from a CSV export.
    /// Returns `None` when `lectures_attended` exceeds `total_lectures` or the
    /// program has no lectures.
    pub(crate) fn with_progress(enrollment: Enrollment, lectures_attended: u32) -> Option<Self> {
        if enrollment.total_lectures == 0 || lectures_attended > enrollment.total_lectures {
            return None;
        }
        let mut record = Self::from_enrollment(enrollment);
        record.lectures_attended = lectures_attended;
        Some(record)
    }

    pub const fn total_lectures(&self) -> u32 {
        self.total_lectures
    }

    pub const fn lectures_attended(&self) -> u32 {
        self.lectures_attended
    }

    pub const fn lectures_remaining(&self) -> u32 {
        self.total_lectures - self.lectures_attended
    }

    pub const fn is_complete(&self) -> bool {
        self.lectures_attended >= self.total_lectures
    }

    /// Label used by the attendance selector: `"{name} - {field} ({round})"`.
    pub fn display_label(&self) -> String {
        format!("{} - {} ({})", self.name, self.field_of_study, self.round)
    }

    pub(crate) fn record_lecture(&mut self) -> AttendanceOutcome {
        if self.is_complete() {
            return AttendanceOutcome::AlreadyComplete {
                total_lectures: self.total_lectures,
            };
        }

        self.lectures_attended += 1;
        AttendanceOutcome::Recorded {
            lectures_attended: self.lectures_attended,
            lectures_remaining: self.lectures_remaining(),
        }
    }
}

/// Result of marking one lecture attended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttendanceOutcome {
    Recorded {
        lectures_attended: u32,
        lectures_remaining: u32,
    },
    /// The trainee has attended every lecture; nothing was changed.
    AlreadyComplete { total_lectures: u32 },
}

impl AttendanceOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recorded { .. } => "Attendance updated",
            Self::AlreadyComplete { .. } => "This trainee has already completed all lectures.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name and Email are required.")]
    MissingNameOrEmail,
    #[error("Total lectures must be at least 1.")]
    NoLectures,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("trainee {0} not found")]
    UnknownTrainee(TraineeId),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrollment(total_lectures: u32) -> Enrollment {
        Enrollment {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            phone: String::new(),
            field_of_study: "AI".to_string(),
            round: "Round 1".to_string(),
            enrollment_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            graduation_date: NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
            total_lectures,
        }
    }

    #[test]
    fn display_label_matches_selector_format() {
        let record = TraineeRecord::from_enrollment(enrollment(16));
        assert_eq!(record.display_label(), "Alice - AI (Round 1)");
    }

    #[test]
    fn record_lecture_stops_at_total() {
        let mut record = TraineeRecord::from_enrollment(enrollment(1));
        assert_eq!(
            record.record_lecture(),
            AttendanceOutcome::Recorded {
                lectures_attended: 1,
                lectures_remaining: 0,
            }
        );
        assert_eq!(
            record.record_lecture(),
            AttendanceOutcome::AlreadyComplete { total_lectures: 1 }
        );
        assert_eq!(record.lectures_attended(), 1);
    }

    #[test]
    fn with_progress_rejects_attendance_over_total() {
        assert!(TraineeRecord::with_progress(enrollment(4), 5).is_none());
        let record = TraineeRecord::with_progress(enrollment(4), 3).expect("valid progress");
        assert_eq!(record.lectures_remaining(), 1);
    }

    #[test]
    fn attendance_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(AttendanceOutcome::AlreadyComplete { total_lectures: 16 })
            .expect("serializes");
        assert_eq!(json["status"], "already_complete");
        assert_eq!(json["total_lectures"], 16);
    }
}

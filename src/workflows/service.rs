use super::enrollment::{
    AttendanceOutcome, Enrollment, ExportError, FieldOfStudyChoice, Registry, RegistryError,
    TraineeId, TraineeView,
};
use super::schedule::{day_rosters, weekly_rosters, ScheduleTable, SlotRoster};
use crate::config::TrackerConfig;
use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Enroll form input before defaults are applied.
#[derive(Debug, Clone)]
pub struct EnrollForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub field_of_study: FieldOfStudyChoice,
    pub round: String,
    /// Defaults to the day of submission.
    pub enrollment_date: Option<NaiveDate>,
    pub graduation_date: NaiveDate,
    /// Defaults to [`TrackerConfig::default_total_lectures`].
    pub total_lectures: Option<u32>,
}

/// Response to an attendance mark: the outcome plus the trainee's current state.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceReceipt {
    #[serde(flatten)]
    pub outcome: AttendanceOutcome,
    pub message: &'static str,
    pub trainee: TraineeView,
}

/// Session-scoped owner of the registry and the weekly schedule.
///
/// Handlers share one instance; the mutex lets exactly one operation touch the
/// registry at a time.
#[derive(Debug)]
pub struct TrackerService {
    registry: Mutex<Registry>,
    schedule: ScheduleTable,
    config: TrackerConfig,
}

impl TrackerService {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_registry(Registry::new(), ScheduleTable::standard(), config)
    }

    pub fn with_registry(registry: Registry, schedule: ScheduleTable, config: TrackerConfig) -> Self {
        Self {
            registry: Mutex::new(registry),
            schedule,
            config,
        }
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    pub fn schedule(&self) -> &ScheduleTable {
        &self.schedule
    }

    pub fn enroll(&self, form: EnrollForm, today: NaiveDate) -> Result<TraineeView, RegistryError> {
        let enrollment = Enrollment {
            name: form.name,
            email: form.email,
            phone: form.phone,
            field_of_study: form.field_of_study.into_field(),
            round: form.round,
            enrollment_date: form.enrollment_date.unwrap_or(today),
            graduation_date: form.graduation_date,
            total_lectures: form
                .total_lectures
                .unwrap_or(self.config.default_total_lectures),
        };

        let mut registry = self.registry();
        let id = registry.enroll(enrollment)?;
        let record = registry.get(id).ok_or(RegistryError::UnknownTrainee(id))?;
        Ok(TraineeView::new(id, record))
    }

    pub fn mark_attendance(&self, id: TraineeId) -> Result<AttendanceReceipt, RegistryError> {
        let mut registry = self.registry();
        let outcome = registry.mark_attendance(id)?;
        let record = registry.get(id).ok_or(RegistryError::UnknownTrainee(id))?;
        Ok(AttendanceReceipt {
            outcome,
            message: outcome.label(),
            trainee: TraineeView::new(id, record),
        })
    }

    pub fn trainees(&self) -> Vec<TraineeView> {
        self.registry()
            .iter()
            .map(|(id, record)| TraineeView::new(id, record))
            .collect()
    }

    pub fn attendance_choices(&self) -> Vec<(TraineeId, String)> {
        self.registry().attendance_choices()
    }

    pub fn export_csv(&self) -> Result<Vec<u8>, ExportError> {
        self.registry().export_csv()
    }

    pub fn weekly_rosters(&self) -> Vec<SlotRoster> {
        weekly_rosters(&self.schedule, &self.registry())
    }

    pub fn day_rosters(&self, day: Weekday) -> Vec<SlotRoster> {
        day_rosters(&self.schedule, &self.registry(), day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::enrollment::ValidationError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
    }

    fn form(name: &str, field: FieldOfStudyChoice, round: &str) -> EnrollForm {
        EnrollForm {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            phone: String::new(),
            field_of_study: field,
            round: round.to_string(),
            enrollment_date: None,
            graduation_date: NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
            total_lectures: None,
        }
    }

    #[test]
    fn enroll_applies_form_defaults() {
        let service = TrackerService::new(TrackerConfig::default());
        let view = service
            .enroll(
                form("Alice", FieldOfStudyChoice::Suggested("AI".to_string()), "Round 1"),
                today(),
            )
            .expect("valid enrollment");

        assert_eq!(view.id, TraineeId(0));
        assert_eq!(view.enrollment_date, today());
        assert_eq!(view.total_lectures, 16);
        assert_eq!(view.lectures_remaining, 16);
        assert_eq!(view.display_label, "Alice - AI (Round 1)");
    }

    #[test]
    fn enroll_with_other_field_stores_typed_value() {
        let service = TrackerService::new(TrackerConfig {
            default_total_lectures: 8,
        });
        let view = service
            .enroll(
                form("Bob", FieldOfStudyChoice::Other("Robotics".to_string()), "Round 2"),
                today(),
            )
            .expect("valid enrollment");
        assert_eq!(view.field_of_study, "Robotics");
        assert_eq!(view.total_lectures, 8);
    }

    #[test]
    fn enroll_surfaces_validation_errors() {
        let service = TrackerService::new(TrackerConfig::default());
        let result = service.enroll(
            form("", FieldOfStudyChoice::Suggested("AI".to_string()), "Round 1"),
            today(),
        );
        assert!(matches!(
            result,
            Err(RegistryError::Validation(ValidationError::MissingNameOrEmail))
        ));
        assert!(service.trainees().is_empty());
    }

    #[test]
    fn attendance_receipt_reports_completion() {
        let service = TrackerService::new(TrackerConfig::default());
        let mut single = form("Cara", FieldOfStudyChoice::Suggested("UAT".to_string()), "Round 1");
        single.total_lectures = Some(1);
        let view = service.enroll(single, today()).expect("valid enrollment");

        let receipt = service.mark_attendance(view.id).expect("known trainee");
        assert_eq!(receipt.trainee.lectures_attended, 1);
        assert_eq!(receipt.message, "Attendance updated");

        let receipt = service.mark_attendance(view.id).expect("known trainee");
        assert_eq!(
            receipt.outcome,
            AttendanceOutcome::AlreadyComplete { total_lectures: 1 }
        );
        assert_eq!(receipt.trainee.lectures_attended, 1);
    }

    #[test]
    fn rosters_follow_schedule_slots() {
        let service = TrackerService::new(TrackerConfig::default());
        service
            .enroll(
                form("Dana", FieldOfStudyChoice::Suggested("AI in HR".to_string()), "Round 1"),
                today(),
            )
            .expect("valid enrollment");

        let saturday = service.day_rosters(Weekday::Sat);
        assert_eq!(saturday.len(), 2);
        assert_eq!(saturday[0].label, "7-8 — AI in HR (Round 1)");
        assert_eq!(saturday[0].trainees.len(), 1);
        assert!(saturday[1].trainees.is_empty());

        let week = service.weekly_rosters();
        assert_eq!(week.len(), service.schedule().slot_count());
        let populated: usize = week.iter().map(|slot| slot.trainees.len()).sum();
        assert_eq!(populated, 1);
    }
}

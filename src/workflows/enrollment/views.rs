use super::domain::{TraineeId, TraineeRecord};
use chrono::NaiveDate;
use serde::Serialize;

/// Full record as shown in the trainee table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraineeView {
    pub id: TraineeId,
    pub display_label: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub field_of_study: String,
    pub round: String,
    pub enrollment_date: NaiveDate,
    pub graduation_date: NaiveDate,
    pub total_lectures: u32,
    pub lectures_attended: u32,
    pub lectures_remaining: u32,
}

impl TraineeView {
    pub fn new(id: TraineeId, record: &TraineeRecord) -> Self {
        Self {
            id,
            display_label: record.display_label(),
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            field_of_study: record.field_of_study.clone(),
            round: record.round.clone(),
            enrollment_date: record.enrollment_date,
            graduation_date: record.graduation_date,
            total_lectures: record.total_lectures(),
            lectures_attended: record.lectures_attended(),
            lectures_remaining: record.lectures_remaining(),
        }
    }
}

/// Columns shown beneath a schedule slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub lectures_attended: u32,
    pub lectures_remaining: u32,
}

impl From<&TraineeRecord> for RosterEntry {
    fn from(record: &TraineeRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            lectures_attended: record.lectures_attended(),
            lectures_remaining: record.lectures_remaining(),
        }
    }
}

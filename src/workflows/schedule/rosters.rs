use super::table::{ScheduleSlot, ScheduleTable};
use crate::workflows::enrollment::{Registry, RosterEntry};
use chrono::Weekday;
use serde::Serialize;

pub const EMPTY_ROSTER_MESSAGE: &str = "No trainees enrolled in this session.";

/// A schedule slot together with the trainees of its cohort.
#[derive(Debug, Clone, Serialize)]
pub struct SlotRoster {
    pub day: &'static str,
    pub time_slot: &'static str,
    pub field_of_study: &'static str,
    pub round: &'static str,
    pub label: String,
    pub trainees: Vec<RosterEntry>,
}

impl SlotRoster {
    pub fn build(slot: ScheduleSlot, registry: &Registry) -> Self {
        let trainees = registry
            .find_by_field_and_round(slot.field_of_study, slot.round)
            .into_iter()
            .map(RosterEntry::from)
            .collect();

        Self {
            day: slot.day_name(),
            time_slot: slot.time_slot,
            field_of_study: slot.field_of_study,
            round: slot.round,
            label: slot.label(),
            trainees,
        }
    }
}

pub fn weekly_rosters(schedule: &ScheduleTable, registry: &Registry) -> Vec<SlotRoster> {
    schedule
        .for_each_slot()
        .map(|slot| SlotRoster::build(slot, registry))
        .collect()
}

pub fn day_rosters(schedule: &ScheduleTable, registry: &Registry, day: Weekday) -> Vec<SlotRoster> {
    schedule
        .slots_for_day(day)
        .into_iter()
        .map(|slot| SlotRoster::build(slot, registry))
        .collect()
}

use chrono::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlotAssignment {
    time_slot: &'static str,
    field_of_study: &'static str,
    round: &'static str,
}

#[derive(Debug, Clone)]
struct ScheduleDay {
    day: Weekday,
    slots: Vec<SlotAssignment>,
}

/// One cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub day: Weekday,
    pub time_slot: &'static str,
    pub field_of_study: &'static str,
    pub round: &'static str,
}

impl ScheduleSlot {
    pub fn day_name(&self) -> &'static str {
        day_name(self.day)
    }

    /// Heading shown above a slot roster: `"{time} — {field} ({round})"`.
    pub fn label(&self) -> String {
        format!(
            "{} — {} ({})",
            self.time_slot, self.field_of_study, self.round
        )
    }
}

/// Read-only weekly timetable mapping each slot to a (field, round) cohort.
#[derive(Debug, Clone)]
pub struct ScheduleTable {
    days: Vec<ScheduleDay>,
}

impl ScheduleTable {
    pub fn standard() -> Self {
        Self {
            days: standard_days(),
        }
    }

    /// Days that have slots, in table order.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.iter().map(|entry| entry.day)
    }

    /// Slots for `day` in table order; empty for a day without classes.
    pub fn slots_for_day(&self, day: Weekday) -> Vec<ScheduleSlot> {
        self.days
            .iter()
            .filter(|entry| entry.day == day)
            .flat_map(|entry| entry.slots.iter().map(move |slot| to_slot(entry.day, slot)))
            .collect()
    }

    /// Walks the whole grid day by day. Each call starts a fresh pass.
    pub fn for_each_slot(&self) -> impl Iterator<Item = ScheduleSlot> + '_ {
        self.days
            .iter()
            .flat_map(|entry| entry.slots.iter().map(move |slot| to_slot(entry.day, slot)))
    }

    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|entry| entry.slots.len()).sum()
    }
}

fn to_slot(day: Weekday, slot: &SlotAssignment) -> ScheduleSlot {
    ScheduleSlot {
        day,
        time_slot: slot.time_slot,
        field_of_study: slot.field_of_study,
        round: slot.round,
    }
}

pub const fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Accepts full or abbreviated day names in any case.
pub fn parse_day(raw: &str) -> Result<Weekday, String> {
    raw.trim()
        .parse::<Weekday>()
        .map_err(|_| format!("'{raw}' is not a day of the week"))
}

fn slot(
    time_slot: &'static str,
    field_of_study: &'static str,
    round: &'static str,
) -> SlotAssignment {
    SlotAssignment {
        time_slot,
        field_of_study,
        round,
    }
}

fn standard_days() -> Vec<ScheduleDay> {
    vec![
        ScheduleDay {
            day: Weekday::Sat,
            slots: vec![
                slot("7-8", "AI in HR", "Round 1"),
                slot("8-9", "Cybersecurity", "Round 2"),
            ],
        },
        ScheduleDay {
            day: Weekday::Sun,
            slots: vec![
                slot("7-8", "AI in BA", "Round 3"),
                slot("8-9", "Python", "Round 1"),
            ],
        },
        ScheduleDay {
            day: Weekday::Mon,
            slots: vec![
                slot("7-8", "Data Entry", "Round 4"),
                slot("8-9", "AI in Stock Exchange", "Round 2"),
            ],
        },
        ScheduleDay {
            day: Weekday::Tue,
            slots: vec![
                slot("7-8", "AI", "Round 1"),
                slot("8-9", "Interior Design", "Round 1"),
            ],
        },
        ScheduleDay {
            day: Weekday::Wed,
            slots: vec![
                slot("7-8", "AI in Graphic Design", "Round 2"),
                slot("8-9", "AI in HR", "Round 2"),
            ],
        },
        ScheduleDay {
            day: Weekday::Thu,
            slots: vec![
                slot("7-8", "Cybersecurity", "Round 3"),
                slot("8-9", "AI in Smart & Sustainable Agriculture", "Round 1"),
            ],
        },
    ]
}

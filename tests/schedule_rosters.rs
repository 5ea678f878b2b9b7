use chrono::{NaiveDate, Weekday};
use training_tracker::workflows::enrollment::{Enrollment, Registry};
use training_tracker::workflows::schedule::{day_rosters, weekly_rosters, ScheduleTable};

fn enroll(registry: &mut Registry, name: &str, field: &str, round: &str) {
    registry
        .enroll(Enrollment {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0100".to_string(),
            field_of_study: field.to_string(),
            round: round.to_string(),
            enrollment_date: NaiveDate::from_ymd_opt(2024, 1, 6).expect("valid date"),
            graduation_date: NaiveDate::from_ymd_opt(2024, 5, 25).expect("valid date"),
            total_lectures: 16,
        })
        .expect("valid enrollment");
}

#[test]
fn weekly_grid_lists_every_slot_in_day_order() {
    let schedule = ScheduleTable::standard();
    let labels: Vec<(String, String)> = schedule
        .for_each_slot()
        .map(|slot| (slot.day_name().to_string(), slot.label()))
        .collect();

    assert_eq!(labels.len(), 12);
    assert_eq!(
        labels[0],
        ("Saturday".to_string(), "7-8 — AI in HR (Round 1)".to_string())
    );
    assert_eq!(
        labels[11],
        (
            "Thursday".to_string(),
            "8-9 — AI in Smart & Sustainable Agriculture (Round 1)".to_string()
        )
    );
}

#[test]
fn rosters_group_trainees_by_cohort() {
    let mut registry = Registry::new();
    enroll(&mut registry, "Huda", "AI in HR", "Round 1");
    enroll(&mut registry, "Omar", "AI in HR", "Round 2");
    enroll(&mut registry, "Rana", "AI in HR", "Round 1");
    enroll(&mut registry, "Sami", "ai in hr", "Round 1");

    let schedule = ScheduleTable::standard();
    let saturday = day_rosters(&schedule, &registry, Weekday::Sat);
    let names: Vec<&str> = saturday[0]
        .trainees
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["Huda", "Rana"]);
    assert_eq!(saturday[0].trainees[0].lectures_remaining, 16);
    assert!(saturday[1].trainees.is_empty());

    let wednesday = day_rosters(&schedule, &registry, Weekday::Wed);
    assert_eq!(wednesday[1].field_of_study, "AI in HR");
    assert_eq!(wednesday[1].round, "Round 2");
    assert_eq!(wednesday[1].trainees.len(), 1);
    assert_eq!(wednesday[1].trainees[0].name, "Omar");

    assert!(day_rosters(&schedule, &registry, Weekday::Fri).is_empty());

    let week = weekly_rosters(&schedule, &registry);
    let listed: usize = week.iter().map(|slot| slot.trainees.len()).sum();
    assert_eq!(listed, 3, "case-mismatched cohort stays off every roster");
}

#[test]
fn roster_entries_only_expose_schedule_columns() {
    let mut registry = Registry::new();
    enroll(&mut registry, "Lina", "Python", "Round 1");

    let schedule = ScheduleTable::standard();
    let sunday = day_rosters(&schedule, &registry, Weekday::Sun);
    let json = serde_json::to_value(&sunday[1].trainees[0]).expect("serializes");
    let mut keys: Vec<&str> = json
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "email",
            "lectures_attended",
            "lectures_remaining",
            "name",
            "phone"
        ]
    );
}

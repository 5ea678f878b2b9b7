use crate::config::{AppConfig, TrackerConfig};
use crate::error::AppError;
use crate::workflows::enrollment::{
    FieldOfStudyChoice, Registry, TraineeId, TraineeView, EXPORT_FILE_NAME, OTHER_FIELD_OPTION,
};
use crate::workflows::schedule::{ScheduleTable, SlotRoster, EMPTY_ROSTER_MESSAGE};
use crate::workflows::{EnrollForm, TrackerService};
use chrono::{Duration, Local, NaiveDate, Weekday};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ScheduleArgs {
    /// Only show one day (e.g. Saturday)
    #[arg(long, value_parser = crate::workflows::schedule::parse_day)]
    pub(crate) day: Option<Weekday>,
    /// Previously exported trainee CSV used to fill the slot rosters
    #[arg(long)]
    pub(crate) records: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Enrollment date used for the sample trainees (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::api::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Write the CSV export to this path instead of printing it
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

pub(crate) fn run_schedule(args: ScheduleArgs) -> Result<(), AppError> {
    let ScheduleArgs { day, records } = args;
    let config = AppConfig::load()?;

    let registry = match records {
        Some(path) => Registry::from_csv_path(path)?,
        None => Registry::new(),
    };
    let service =
        TrackerService::with_registry(registry, ScheduleTable::standard(), config.tracker);

    let rosters = match day {
        Some(day) => service.day_rosters(day),
        None => service.weekly_rosters(),
    };

    println!("Weekly training schedule");
    if rosters.is_empty() {
        println!("\nNo sessions scheduled.");
    }
    render_rosters(&rosters);
    Ok(())
}

struct SampleTrainee {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    field: &'static str,
    other_field: &'static str,
    round: &'static str,
    total_lectures: Option<u32>,
    lectures_attended: u32,
}

const SAMPLE_TRAINEES: [SampleTrainee; 4] = [
    SampleTrainee {
        name: "Alice",
        email: "alice@example.com",
        phone: "",
        field: "AI",
        other_field: "",
        round: "Round 1",
        total_lectures: None,
        lectures_attended: 3,
    },
    SampleTrainee {
        name: "Bilal",
        email: "bilal@example.com",
        phone: "+20 100 000 0000",
        field: "AI in HR",
        other_field: "",
        round: "Round 1",
        total_lectures: Some(2),
        lectures_attended: 3,
    },
    SampleTrainee {
        name: "Chen",
        email: "chen@example.com",
        phone: "",
        field: OTHER_FIELD_OPTION,
        other_field: "Robotics",
        round: "Round 1",
        total_lectures: Some(8),
        lectures_attended: 1,
    },
    SampleTrainee {
        name: "Dina",
        email: "",
        phone: "",
        field: "Python",
        other_field: "",
        round: "Round 1",
        total_lectures: None,
        lectures_attended: 0,
    },
];

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    run_demo_with(config.tracker, args)
}

fn run_demo_with(tracker: TrackerConfig, args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, export } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = TrackerService::new(tracker);

    println!("Training tracker demo");
    println!("\nEnrollment");
    for sample in &SAMPLE_TRAINEES {
        let form = EnrollForm {
            name: sample.name.to_string(),
            email: sample.email.to_string(),
            phone: sample.phone.to_string(),
            field_of_study: FieldOfStudyChoice::from_selection(sample.field, sample.other_field),
            round: sample.round.to_string(),
            enrollment_date: Some(today),
            graduation_date: today + Duration::weeks(20),
            total_lectures: sample.total_lectures,
        };

        match service.enroll(form, today) {
            Ok(view) => {
                println!(
                    "- Enrolled {} in {} ({})",
                    view.name, view.field_of_study, view.round
                );
                mark_lectures(&service, view.id, sample.lectures_attended)?;
            }
            Err(err) => println!("- Rejected {}: {}", sample.name, err),
        }
    }

    println!("\nAll enrolled trainees");
    render_trainee_table(&service.trainees());

    println!("\nWeekly schedule rosters");
    render_rosters(&service.weekly_rosters());

    let csv = service.export_csv()?;
    match export {
        Some(path) => {
            std::fs::write(&path, &csv)?;
            println!("\nCSV export written to {}", path.display());
        }
        None => {
            println!("\nCSV export ({EXPORT_FILE_NAME})");
            print!("{}", String::from_utf8_lossy(&csv));
        }
    }

    Ok(())
}

fn mark_lectures(service: &TrackerService, id: TraineeId, count: u32) -> Result<(), AppError> {
    for _ in 0..count {
        let receipt = service.mark_attendance(id)?;
        println!(
            "  {}: {} ({}/{} attended)",
            receipt.trainee.display_label,
            receipt.message,
            receipt.trainee.lectures_attended,
            receipt.trainee.total_lectures
        );
    }
    Ok(())
}

fn render_trainee_table(trainees: &[TraineeView]) {
    if trainees.is_empty() {
        println!("No trainee records yet.");
        return;
    }

    for trainee in trainees {
        let phone = if trainee.phone.is_empty() {
            "-"
        } else {
            trainee.phone.as_str()
        };
        println!(
            "- {} | {} | {} | {} | {} -> {} | {}/{} attended, {} remaining",
            trainee.name,
            trainee.email,
            phone,
            trainee.field_of_study,
            trainee.enrollment_date,
            trainee.graduation_date,
            trainee.lectures_attended,
            trainee.total_lectures,
            trainee.lectures_remaining
        );
    }
}

fn render_rosters(rosters: &[SlotRoster]) {
    let mut current_day = None;
    for roster in rosters {
        if current_day != Some(roster.day) {
            println!("\n{}", roster.day);
            current_day = Some(roster.day);
        }

        println!("  {}", roster.label);
        if roster.trainees.is_empty() {
            println!("    {EMPTY_ROSTER_MESSAGE}");
            continue;
        }
        for trainee in &roster.trainees {
            println!(
                "    - {} | {} | {} | {} attended | {} remaining",
                trainee.name,
                trainee.email,
                trainee.phone,
                trainee.lectures_attended,
                trainee.lectures_remaining
            );
        }
    }
}

//! Trainee enrollment and attendance tracking against a fixed weekly schedule.

pub mod api;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

pub mod enrollment;
pub mod schedule;
mod service;

pub use service::{AttendanceReceipt, EnrollForm, TrackerService};

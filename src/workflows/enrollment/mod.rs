//! Trainee enrollment, attendance tracking, and CSV export.

mod domain;
mod export;
mod fields;
mod registry;
pub mod views;

pub use domain::{
    AttendanceOutcome, Enrollment, RegistryError, TraineeId, TraineeRecord, ValidationError,
};
pub use export::{export_csv, import_csv, ExportError, CSV_HEADERS, EXPORT_FILE_NAME};
pub use fields::{field_options, suggested_fields, FieldOfStudyChoice, OTHER_FIELD_OPTION};
pub use registry::Registry;
pub use views::{RosterEntry, TraineeView};

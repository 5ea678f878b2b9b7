use super::domain::{Enrollment, TraineeRecord};
use super::registry::Registry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

pub const EXPORT_FILE_NAME: &str = "training_tracker_records.csv";

pub const CSV_HEADERS: [&str; 10] = [
    "Name",
    "Email",
    "Phone",
    "Field of Study",
    "Round",
    "Enrollment Date",
    "Graduation Date",
    "Total Lectures",
    "Lectures Attended",
    "Lectures Remaining",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to read or write trainee CSV: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid trainee CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {reason}")]
    InconsistentRow { row: usize, reason: &'static str },
}

#[derive(Debug, Serialize, Deserialize)]
struct TraineeRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Phone", default)]
    phone: String,
    #[serde(rename = "Field of Study")]
    field_of_study: String,
    #[serde(rename = "Round")]
    round: String,
    #[serde(rename = "Enrollment Date")]
    enrollment_date: NaiveDate,
    #[serde(rename = "Graduation Date")]
    graduation_date: NaiveDate,
    #[serde(rename = "Total Lectures")]
    total_lectures: u32,
    #[serde(rename = "Lectures Attended")]
    lectures_attended: u32,
    #[serde(rename = "Lectures Remaining")]
    lectures_remaining: u32,
}

impl From<&TraineeRecord> for TraineeRow {
    fn from(record: &TraineeRecord) -> Self {
        Self {
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

impl TraineeRow {
    fn into_record(self, row: usize) -> Result<TraineeRecord, ExportError> {
        if self.total_lectures.checked_sub(self.lectures_attended) != Some(self.lectures_remaining)
        {
            return Err(ExportError::InconsistentRow {
                row,
                reason: "lectures remaining must equal total lectures minus lectures attended",
            });
        }

        let lectures_attended = self.lectures_attended;
        let enrollment = Enrollment {
            name: self.name,
            email: self.email,
            phone: self.phone,
            field_of_study: self.field_of_study,
            round: self.round,
            enrollment_date: self.enrollment_date,
            graduation_date: self.graduation_date,
            total_lectures: self.total_lectures,
        };

        TraineeRecord::with_progress(enrollment, lectures_attended).ok_or(
            ExportError::InconsistentRow {
                row,
                reason: "total lectures must be at least 1",
            },
        )
    }
}

/// Serialize every record, header first, even when the registry is empty.
pub fn export_csv(records: &[TraineeRecord]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;

    for record in records {
        writer.serialize(TraineeRow::from(record))?;
    }

    writer.into_inner().map_err(|err| {
        let source = err.error();
        ExportError::Io(std::io::Error::new(source.kind(), source.to_string()))
    })
}

/// Parse a previously exported CSV back into records.
pub fn import_csv<R: Read>(reader: R) -> Result<Vec<TraineeRecord>, ExportError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<TraineeRow>().enumerate() {
        records.push(row?.into_record(index + 1)?);
    }

    Ok(records)
}

impl Registry {
    pub fn export_csv(&self) -> Result<Vec<u8>, ExportError> {
        export_csv(self.list_all())
    }

    pub fn from_csv<R: Read>(reader: R) -> Result<Self, ExportError> {
        import_csv(reader).map(Self::from_records)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, ExportError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv(file)
    }
}

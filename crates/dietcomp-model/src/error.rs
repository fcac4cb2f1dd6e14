use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("treatment id must not be empty")]
    EmptyTreatmentId,
    #[error("duplicate treatment id: {0}")]
    DuplicateTreatment(String),
    #[error("treatment {treatment}: date range ends before it starts ({end} < {start})")]
    InvalidDateRange {
        treatment: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;

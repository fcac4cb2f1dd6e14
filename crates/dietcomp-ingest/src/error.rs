use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("lab table is missing required column '{column}'")]
    MissingColumn { column: String },
    #[error("lab table has no data rows")]
    EmptyTable,
}

pub type Result<T> = std::result::Result<T, IngestError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("reference library is missing required column '{column}'")]
    MissingColumn { column: String },
    #[error("reference library has no entries")]
    Empty,
}

pub type Result<T> = std::result::Result<T, LibraryError>;

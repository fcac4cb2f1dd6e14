use thiserror::Error;

use dietcomp_model::ModelError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("no feed mapping configured for '{feed}'")]
    MissingMapping { feed: String },
    #[error("lab table has no rows")]
    EmptyLabTable,
}

pub type Result<T> = std::result::Result<T, CoreError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommitError {
    #[error("{0}")]
    Validation(String),
    #[error("Reservation not found")]
    NotFound,
    #[error("Database error: {0}")]
    Persistence(String),
}

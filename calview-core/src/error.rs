//! Error types for calview.

use thiserror::Error;

/// Errors that can occur while building or querying a calendar.
#[derive(Error, Debug)]
pub enum CalViewError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("No resolution set on calendar")]
    MissingResolution,

    #[error("Resolution has no date to build from")]
    MissingDate,

    #[error("Invalid event range: {0}")]
    InvalidEventRange(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CalViewError {
    fn from(err: serde_json::Error) -> Self {
        CalViewError::Serialization(err.to_string())
    }
}

/// Result type alias for calview operations.
pub type CalViewResult<T> = Result<T, CalViewError>;

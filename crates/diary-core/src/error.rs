//! Error types for Diary core operations.
//!
//! Errors are descriptive at the core level; the CLI layer decides how to
//! present them. Interactive mistakes (a malformed date, say) never reach this
//! type: the CLI re-prompts for those inline.

use thiserror::Error;

/// Result type alias for Diary operations.
pub type Result<T> = std::result::Result<T, DiaryError>;

/// Core error type for Diary operations.
#[derive(Debug, Error)]
pub enum DiaryError {
    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid caller input (page size, page number)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Console read/write failure
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DiaryError {
    fn from(err: std::io::Error) -> Self {
        DiaryError::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for DiaryError {
    fn from(err: rusqlite::Error) -> Self {
        DiaryError::Storage(format!("SQLite error: {}", err))
    }
}

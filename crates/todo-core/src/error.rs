//! Error types for todo-core

use thiserror::Error;

/// Result type alias for todo operations
pub type Result<T> = std::result::Result<T, TodoError>;

/// Main error type for todo operations
#[derive(Error, Debug)]
pub enum TodoError {
    /// Input rejected before reaching storage
    #[error("Validation error: {0}")]
    Validation(String),

    /// No row matches the given id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Persistence-related errors
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Persistence-specific errors
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Database error
    #[error("Database error: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for PersistenceError {
    fn from(err: rusqlite::Error) -> Self {
        PersistenceError::Database(err.to_string())
    }
}

impl From<rusqlite::Error> for TodoError {
    fn from(err: rusqlite::Error) -> Self {
        TodoError::Persistence(PersistenceError::Database(err.to_string()))
    }
}

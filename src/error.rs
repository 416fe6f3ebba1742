//! Error types for Filedrop.

use thiserror::Error;

/// Common error type for Filedrop.
#[derive(Error, Debug)]
pub enum FiledropError {
    /// Database error.
    ///
    /// Query and decoding failures from sqlx end up here. Failures to reach
    /// the database at all are reported as `DatabaseConnection` instead.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl FiledropError {
    /// Returns true if the database could not be reached.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, FiledropError::DatabaseConnection(_))
    }
}

// Conversion from sqlx errors
impl From<sqlx::Error> for FiledropError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => FiledropError::DatabaseConnection(e.to_string()),
            _ => FiledropError::Database(e.to_string()),
        }
    }
}

/// Result type alias for Filedrop operations.
pub type Result<T> = std::result::Result<T, FiledropError>;

//! Error handling utilities for the wellspring application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Represents specific error cases that can occur when requesting entry analysis.
///
/// Exactly one of these variants is produced per analysis attempt. None of them
/// are ever surfaced to API clients: the journal operations layer absorbs them
/// and stores the entry without analysis.
///
/// # Examples
///
/// ```
/// use wellspring::errors::AIError;
///
/// let error = AIError::Timeout;
/// assert!(format!("{}", error).contains("deadline"));
/// ```
#[derive(Debug, Error)]
pub enum AIError {
    /// The analysis endpoint could not be reached, or it answered with a
    /// transport-level error status.
    #[error("Analysis service unreachable: {0}. Is Ollama running? Try: ollama serve")]
    Unreachable(#[source] reqwest::Error),

    /// No response arrived within the configured deadline.
    #[error("Analysis request exceeded its deadline")]
    Timeout,

    /// The exchange was structurally unusable: an empty prompt, an unparseable
    /// payload, or a response without a usable result field.
    #[error("Malformed analysis exchange: {0}")]
    Malformed(String),
}

/// Represents specific error cases that can occur during database operations.
///
/// # Examples
///
/// ```
/// use wellspring::errors::DatabaseError;
///
/// let error = DatabaseError::NotFound("Habit with id 42 not found".to_string());
/// assert!(format!("{}", error).contains("not found"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// Requested record not found in the database.
    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Represents all possible errors that can occur in the wellspring application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error`
/// trait implementation and formatted error messages.
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected user input. The message is safe to show to the caller.
    #[error("{0}")]
    Validation(String),

    /// Input/output errors, primarily from binding the listener socket.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors related to database operations.
    ///
    /// This variant uses a dedicated DatabaseError type to provide detailed
    /// information about what went wrong with database operations.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::AddrInUse, "address in use");
        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::AddrInUse),
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid bind address".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid bind address"
        );

        // Validation errors pass their message through untouched so the API
        // can hand it straight to the client.
        let validation_error = AppError::Validation("Content cannot be empty".to_string());
        assert_eq!(format!("{}", validation_error), "Content cannot be empty");
    }

    #[test]
    fn test_database_error_conversion_to_app_error() {
        let db_error = DatabaseError::NotFound("Habit with id 7 not found".to_string());
        let app_error: AppError = db_error.into();

        match app_error {
            AppError::Database(DatabaseError::NotFound(message)) => {
                assert!(message.contains("id 7"));
            }
            _ => panic!("Expected AppError::Database variant"),
        }
    }

    #[test]
    fn test_database_error_source_chaining() {
        use std::error::Error;

        let sqlite_error = rusqlite::Error::QueryReturnedNoRows;
        let db_error = DatabaseError::Sqlite(sqlite_error);
        let app_error = AppError::Database(db_error);

        let first_source = app_error
            .source()
            .expect("AppError::Database should have a source");
        let db_source = first_source
            .downcast_ref::<DatabaseError>()
            .expect("First source should be DatabaseError");
        assert!(db_source.source().is_some(), "Sqlite variant keeps its cause");
    }

    #[test]
    fn test_ai_error_display() {
        let error = AIError::Timeout;
        assert!(format!("{}", error).contains("deadline"));

        let error = AIError::Malformed("missing result field".to_string());
        let message = format!("{}", error);
        assert!(message.contains("Malformed"));
        assert!(message.contains("missing result field"));
    }
}

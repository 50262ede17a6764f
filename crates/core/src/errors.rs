//! Core error types for the Tally application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (I/O, JSON parsing, etc.) are converted to these types by the storage
//! layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the finance tracker.
///
/// Validation errors are the only kind surfaced to the end user; storage
/// errors may be reported as a generic notification. Nothing here is fatal
/// to the process.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for persistence operations.
///
/// Uses `String` for all error details so the storage layer can convert its
/// backend-specific errors (file I/O, JSON, etc.) into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read a stored blob.
    #[error("Failed to read stored data: {0}")]
    ReadFailed(String),

    /// Failed to write a blob through to storage.
    #[error("Failed to write data: {0}")]
    WriteFailed(String),

    /// A stored blob exists but cannot be decoded.
    #[error("Stored data is corrupt: {0}")]
    CorruptData(String),

    /// The requested key or record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Internal/unexpected storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] chrono::ParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Store(StoreError::CorruptData(err.to_string()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Store(StoreError::ReadFailed(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

//! Storage-specific error types for the JSON blob store.
//!
//! These wrap I/O and JSON errors and are converted to the
//! storage-agnostic `tally_core` error types before crossing the crate
//! boundary.

use tally_core::errors::{Error, StoreError};
use thiserror::Error;

/// Storage-specific errors internal to this crate.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to persist blob: {0}")]
    PersistFailed(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => Error::Store(StoreError::ReadFailed(e.to_string())),
            StorageError::Serialization(e) => Error::Store(StoreError::CorruptData(e.to_string())),
            StorageError::PersistFailed(e) => Error::Store(StoreError::WriteFailed(e)),
        }
    }
}

//! # Store Errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Review store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Stored data does not match its manifest
    #[error("Store corrupted: {0}")]
    Corrupted(String),

    /// A record breaks a model invariant
    #[error("Invalid review record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Store already initialized at {}", .0.display())]
    AlreadyInitialized(PathBuf),
}

impl StoreError {
    /// I/O error with the path that failed
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Io { .. } => "STORE_IO",
            StoreError::Serialization(_) => "STORE_SERIALIZATION",
            StoreError::Corrupted(_) => "STORE_CORRUPTED",
            StoreError::InvalidRecord { .. } => "STORE_INVALID_RECORD",
            StoreError::AlreadyInitialized(_) => "STORE_ALREADY_INITIALIZED",
        }
    }

    /// Corrupted or invalid persisted data
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            StoreError::Corrupted(_) | StoreError::InvalidRecord { .. }
        )
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

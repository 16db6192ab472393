//! Store Errors
//!
//! Error type shared by the store, its storage backends and the codec.

use serde::{Deserialize, Serialize};

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreError {
    /// No item with the given id
    NotFound(String),
    /// Another item is already being edited
    EditInProgress(String),
    /// An edit operation was issued with no active session
    NoActiveEdit,
    /// The storage backend failed to read or write
    Storage(String),
    /// Persisted data could not be encoded or decoded
    Codec(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(msg) => write!(f, "Not found: {}", msg),
            StoreError::EditInProgress(msg) => write!(f, "Edit in progress: {}", msg),
            StoreError::NoActiveEdit => write!(f, "No active edit"),
            StoreError::Storage(msg) => write!(f, "Storage error: {}", msg),
            StoreError::Codec(msg) => write!(f, "Codec error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Codec(err.to_string())
    }
}

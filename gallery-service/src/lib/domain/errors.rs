use std::time::Duration;

use thiserror::Error;

/// Failure reported by a storage adapter.
///
/// Adapters classify backend errors into these variants so the domain never
/// inspects driver-specific error text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("Storage operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Query failed: {0}")]
    Query(String),
}

use thiserror::Error;

use crate::domain::errors::StorageError;

/// Error for PhotoId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhotoIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for like operations
#[derive(Debug, Clone, Error)]
pub enum LikeError {
    #[error("Invalid photo ID: {0}")]
    InvalidPhotoId(#[from] PhotoIdError),

    #[error("photo has already been liked")]
    AlreadyLiked,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

use thiserror::Error;

use crate::domain::errors::StorageError;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 32;

/// Rejected username at registration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("must be at least {USERNAME_MIN_LENGTH} characters, got {0}")]
    TooShort(usize),

    #[error("must be at most {USERNAME_MAX_LENGTH} characters, got {0}")]
    TooLong(usize),

    #[error("may only contain letters, digits, '_' and '-'")]
    InvalidCharacters,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("not a valid email address: {0}")]
pub struct EmailError(pub String);

/// Failure to register or look up an account.
///
/// The two duplicate variants are told apart by the unique constraint that
/// fired, not by a prior lookup.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("a user with this username already exists")]
    UsernameAlreadyExists(String),

    #[error("a user with this email address already exists")]
    EmailAlreadyExists(String),

    #[error("Password hashing failed: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

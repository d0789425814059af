use auth::AuthenticationError;
use thiserror::Error;

use crate::domain::errors::StorageError;
use crate::user::errors::UserError;

/// Top-level error for token issuance and verification.
///
/// `InvalidToken` covers unknown, expired and wrong-scope tokens alike;
/// `InvalidCredentials` covers unknown email and wrong password alike.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("invalid authentication credentials")]
    InvalidCredentials,

    #[error("invalid or missing authentication token")]
    InvalidToken,

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token generation failed: {0}")]
    Generation(#[from] auth::TokenGenerationError),

    // Infrastructure errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<AuthenticationError> for TokenError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::InvalidCredentials => TokenError::InvalidCredentials,
            AuthenticationError::PasswordError(e) => TokenError::Password(e),
            AuthenticationError::TokenError(e) => TokenError::Generation(e),
        }
    }
}

impl From<UserError> for TokenError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Storage(e) => TokenError::Storage(e),
            UserError::Password(e) => TokenError::Password(e),
            other => TokenError::Unknown(other.to_string()),
        }
    }
}

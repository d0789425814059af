use thiserror::Error;

/// Error type for token generation.
#[derive(Debug, Clone, Error)]
pub enum TokenGenerationError {
    #[error("Random source unavailable: {0}")]
    EntropyUnavailable(String),
}

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::GeneratedToken;
use crate::token::TokenGenerationError;
use crate::token::TokenGenerator;

// Plaintext behind the decoy hash; its verification result is never used.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Authentication coordinator combining password verification and token generation.
///
/// Cloning is cheap; the coordinator holds no connections or secrets.
#[derive(Debug, Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_generator: TokenGenerator,
    decoy_hash: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenGenerationError),
}

impl Authenticator {
    /// Create an authenticator around a tuned password hasher.
    ///
    /// Hashes a decoy password up front with the same work factor, so a login
    /// for an unknown account can pay for one full verification.
    ///
    /// # Errors
    /// * `PasswordError` - The decoy password could not be hashed
    pub fn with_password_hasher(password_hasher: PasswordHasher) -> Result<Self, PasswordError> {
        let decoy_hash = password_hasher.hash(DECOY_PASSWORD)?;

        Ok(Self {
            password_hasher,
            token_generator: TokenGenerator::new(),
            decoy_hash,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unusable
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<(), AuthenticationError> {
        if self.password_hasher.verify(password, stored_hash)? {
            Ok(())
        } else {
            Err(AuthenticationError::InvalidCredentials)
        }
    }

    /// Verify a password for an account that does not exist.
    ///
    /// Runs a full verification against the decoy hash and always fails with
    /// `InvalidCredentials`, so an unknown email costs as much as a wrong password.
    pub fn reject_unknown_account(&self, password: &str) -> AuthenticationError {
        match self.password_hasher.verify(password, &self.decoy_hash) {
            Ok(_) => AuthenticationError::InvalidCredentials,
            Err(e) => AuthenticationError::PasswordError(e),
        }
    }

    /// Generate a token without password verification.
    ///
    /// Used once the caller has been authenticated by other means.
    pub fn generate_token(&self) -> Result<GeneratedToken, TokenGenerationError> {
        self.token_generator.generate()
    }
}

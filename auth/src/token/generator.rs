use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Digest;
use sha2::Sha256;

use super::errors::TokenGenerationError;

/// Random bytes drawn per token (160 bits).
pub const TOKEN_ENTROPY_BYTES: usize = 20;

/// Length of the plaintext token (hex encoded).
pub const TOKEN_LENGTH: usize = TOKEN_ENTROPY_BYTES * 2;

/// A freshly generated opaque token.
///
/// The plaintext is handed to the client once; only the hash is persisted.
pub struct GeneratedToken {
    pub plaintext: String,
    pub hash: [u8; 32],
}

impl std::fmt::Debug for GeneratedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedToken")
            .field("plaintext", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Opaque bearer token generator.
///
/// Tokens are drawn from the operating system CSPRNG so that knowledge of
/// previously issued tokens says nothing about the next one. The lookup hash
/// is a plain SHA-256: the secret already carries full entropy, so a slow
/// hash would only add per-request cost.
#[derive(Debug, Clone, Default)]
pub struct TokenGenerator;

impl TokenGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a new token and its lookup hash.
    ///
    /// # Errors
    /// * `EntropyUnavailable` - The OS random source failed
    pub fn generate(&self) -> Result<GeneratedToken, TokenGenerationError> {
        let mut bytes = [0u8; TOKEN_ENTROPY_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| TokenGenerationError::EntropyUnavailable(e.to_string()))?;

        let plaintext = hex::encode(bytes);
        let hash = hash_token(&plaintext);

        Ok(GeneratedToken { plaintext, hash })
    }
}

/// Deterministic lookup hash of a plaintext token.
pub fn hash_token(plaintext: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hasher.finalize().into()
}

/// Checks that a presented token has the shape this generator produces.
///
/// Lets callers reject garbage without a storage round trip.
pub fn is_well_formed(plaintext: &str) -> bool {
    plaintext.len() == TOKEN_LENGTH
        && plaintext
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token() {
        let generator = TokenGenerator::new();
        let token = generator.generate().expect("Failed to generate token");

        assert_eq!(token.plaintext.len(), TOKEN_LENGTH);
        assert!(is_well_formed(&token.plaintext));
        assert_eq!(token.hash, hash_token(&token.plaintext));
    }

    #[test]
    fn test_tokens_are_unique() {
        let generator = TokenGenerator::new();
        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();

        assert_ne!(first.plaintext, second.plaintext);
        assert_ne!(first.hash, second.hash);
    }

    #[test]
    fn test_hash_is_deterministic() {
        let hash = hash_token("0123456789abcdef0123456789abcdef01234567");
        assert_eq!(hash, hash_token("0123456789abcdef0123456789abcdef01234567"));
        assert_ne!(hash, hash_token("0123456789abcdef0123456789abcdef01234568"));
    }

    #[test]
    fn test_hash_does_not_contain_plaintext() {
        let token = TokenGenerator::new().generate().unwrap();
        assert_ne!(hex::encode(token.hash), token.plaintext);
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed("0123456789abcdef0123456789abcdef01234567"));

        // Wrong length
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("0123456789abcdef"));
        assert!(!is_well_formed("0123456789abcdef0123456789abcdef012345678"));

        // Uppercase and non-hex characters
        assert!(!is_well_formed("0123456789ABCDEF0123456789abcdef01234567"));
        assert!(!is_well_formed("0123456789abcdefg123456789abcdef01234567"));
        assert!(!is_well_formed("0123456789abcdef 123456789abcdef01234567"));
    }

    #[test]
    fn test_debug_redacts_plaintext() {
        let token = TokenGenerator::new().generate().unwrap();
        let debug = format!("{:?}", token);
        assert!(!debug.contains(&token.plaintext));
    }
}

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::IssuedToken;
use crate::domain::token::models::LoginCommand;
use crate::domain::token::models::Token;
use crate::domain::token::models::TokenHash;
use crate::domain::token::models::TokenScope;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for token issuance and verification.
#[async_trait]
pub trait TokenServicePort: Send + Sync + 'static {
    /// Mint a new token for a user.
    ///
    /// # Arguments
    /// * `user_id` - Owner of the token
    /// * `ttl` - Validity window starting now
    /// * `scope` - What the token may be used for
    ///
    /// # Returns
    /// The plaintext token and its expiry; the plaintext is not retrievable again
    ///
    /// # Errors
    /// * `Generation` - Random source failed
    /// * `Storage` - Database operation failed or timed out
    async fn issue_token(
        &self,
        user_id: &UserId,
        ttl: Duration,
        scope: TokenScope,
    ) -> Result<IssuedToken, TokenError>;

    /// Verify email and password, then mint an authentication token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Password` - Stored hash is corrupt
    /// * `Storage` - Database operation failed or timed out
    async fn authenticate(&self, command: LoginCommand) -> Result<IssuedToken, TokenError>;

    /// Resolve the owner of a presented token.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, unknown, expired or wrong-scope token (indistinguishable)
    /// * `Storage` - Database operation failed or timed out
    async fn resolve_token(&self, scope: &TokenScope, plaintext: &str)
        -> Result<User, TokenError>;
}

/// Persistence operations for tokens.
#[async_trait]
pub trait TokenRepository: Send + Sync + 'static {
    /// Persist a new token record.
    ///
    /// # Errors
    /// * `Storage` - Database operation failed or timed out
    async fn create(&self, token: Token) -> Result<Token, TokenError>;

    /// Find the owner of the token with this hash and scope that is still
    /// valid at `now`.
    ///
    /// # Returns
    /// Optional owning user (None when no token matches)
    ///
    /// # Errors
    /// * `Storage` - Database operation failed or timed out
    async fn find_user_by_token(
        &self,
        hash: &TokenHash,
        scope: &TokenScope,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, TokenError>;
}

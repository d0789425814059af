use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Duration;
use chrono::Utc;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::IssuedToken;
use crate::domain::token::models::LoginCommand;
use crate::domain::token::models::Token;
use crate::domain::token::models::TokenHash;
use crate::domain::token::models::TokenId;
use crate::domain::token::models::TokenScope;
use crate::domain::token::ports::TokenRepository;
use crate::domain::token::ports::TokenServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for token operations.
pub struct TokenService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    users: Arc<UR>,
    tokens: Arc<TR>,
    authenticator: Arc<Authenticator>,
    authentication_ttl: Duration,
}

impl<UR, TR> TokenService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    /// Create a new token service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User lookup for login
    /// * `tokens` - Token persistence implementation
    /// * `authenticator` - Password verification and token generation
    /// * `authentication_ttl` - Lifetime of tokens issued at login
    pub fn new(
        users: Arc<UR>,
        tokens: Arc<TR>,
        authenticator: Arc<Authenticator>,
        authentication_ttl: Duration,
    ) -> Self {
        Self {
            users,
            tokens,
            authenticator,
            authentication_ttl,
        }
    }
}

#[async_trait]
impl<UR, TR> TokenServicePort for TokenService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    async fn issue_token(
        &self,
        user_id: &UserId,
        ttl: Duration,
        scope: TokenScope,
    ) -> Result<IssuedToken, TokenError> {
        let generated = self.authenticator.generate_token()?;
        let now = Utc::now();

        let token = Token {
            id: TokenId::new(),
            user_id: *user_id,
            hash: TokenHash(generated.hash),
            scope,
            expiry: now + ttl,
            created_at: now,
        };

        let token = self.tokens.create(token).await?;

        tracing::debug!(
            token_id = %token.id,
            user_id = %token.user_id,
            scope = %token.scope,
            expiry = %token.expiry,
            "Token issued"
        );

        Ok(IssuedToken {
            token: generated.plaintext,
            scope: token.scope,
            expiry: token.expiry,
        })
    }

    async fn authenticate(&self, command: LoginCommand) -> Result<IssuedToken, TokenError> {
        let user = self.users.find_by_email(&command.email).await?;

        // An unknown email still pays for one Argon2 verification
        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = user.as_ref().map(|user| user.password_hash.clone());
        let password = command.password;
        let verified = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => authenticator.verify_password(&password, hash.as_str()),
            None => Err(authenticator.reject_unknown_account(&password)),
        })
        .await
        .map_err(|e| TokenError::Unknown(format!("Password verification task failed: {}", e)))?;

        let user = match (user, verified) {
            (Some(user), Ok(())) => user,
            (Some(user), Err(e)) => {
                tracing::debug!(user_id = %user.id, "Login rejected: {}", e);
                return Err(TokenError::from(e));
            }
            (None, _) => {
                tracing::debug!("Login rejected: unknown email");
                return Err(TokenError::InvalidCredentials);
            }
        };

        let issued = self
            .issue_token(&user.id, self.authentication_ttl, TokenScope::AUTHENTICATION)
            .await?;

        tracing::info!(user_id = %user.id, "User authenticated");

        Ok(issued)
    }

    async fn resolve_token(
        &self,
        scope: &TokenScope,
        plaintext: &str,
    ) -> Result<User, TokenError> {
        if !auth::token::is_well_formed(plaintext) {
            return Err(TokenError::InvalidToken);
        }

        self.tokens
            .find_user_by_token(&TokenHash::of(plaintext), scope, Utc::now())
            .await?
            .ok_or(TokenError::InvalidToken)
    }
}

use std::borrow::Cow;
use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;

/// Persisted authentication token.
///
/// Only the lookup hash of the secret is kept; the plaintext exists once, in
/// the `IssuedToken` returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub id: TokenId,
    pub user_id: UserId,
    pub hash: TokenHash,
    pub scope: TokenScope,
    pub expiry: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Token {
    /// Whether the token may still be presented at `now`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expiry
    }
}

/// Token unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub Uuid);

impl TokenId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TokenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// SHA-256 lookup hash of a token secret.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenHash(pub [u8; 32]);

impl TokenHash {
    /// Hash a presented plaintext token.
    pub fn of(plaintext: &str) -> Self {
        Self(auth::token::hash_token(plaintext))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for TokenHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenHash(<redacted>)")
    }
}

/// Label restricting what a token may be used for.
///
/// Scopes are opaque strings in storage; `AUTHENTICATION` grants general API access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TokenScope(Cow<'static, str>);

impl TokenScope {
    pub const AUTHENTICATION: TokenScope = TokenScope(Cow::Borrowed("authentication"));

    pub fn new(scope: impl Into<String>) -> Self {
        Self(Cow::Owned(scope.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Token handed back to the client after a successful login.
///
/// This is the only place the plaintext secret ever appears.
#[derive(Clone, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub scope: TokenScope,
    pub expiry: DateTime<Utc>,
}

impl fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedToken")
            .field("token", &"<redacted>")
            .field("scope", &self.scope)
            .field("expiry", &self.expiry)
            .finish()
    }
}

/// Command to exchange email and password for an authentication token
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

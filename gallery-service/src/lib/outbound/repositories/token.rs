use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use super::user::row_to_user;
use super::with_deadline;
use crate::domain::token::errors::TokenError;
use crate::domain::token::models::Token;
use crate::domain::token::models::TokenHash;
use crate::domain::token::models::TokenScope;
use crate::domain::token::ports::TokenRepository;
use crate::domain::user::models::User;

pub struct PostgresTokenRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresTokenRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl TokenRepository for PostgresTokenRepository {
    async fn create(&self, token: Token) -> Result<Token, TokenError> {
        let insert = sqlx::query(
            r#"
            INSERT INTO tokens (id, hash, user_id, scope, expiry, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(token.id.0)
        .bind(token.hash.as_bytes())
        .bind(token.user_id.0)
        .bind(token.scope.as_str())
        .bind(token.expiry)
        .bind(token.created_at)
        .execute(&self.pool);

        with_deadline(self.query_timeout, insert).await?;

        Ok(token)
    }

    async fn find_user_by_token(
        &self,
        hash: &TokenHash,
        scope: &TokenScope,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, TokenError> {
        let select = sqlx::query(
            r#"
            SELECT users.id, users.username, users.email, users.password_hash, users.created_at
            FROM users
            INNER JOIN tokens ON tokens.user_id = users.id
            WHERE tokens.hash = $1
              AND tokens.scope = $2
              AND tokens.expiry > $3
            "#,
        )
        .bind(hash.as_bytes())
        .bind(scope.as_str())
        .bind(now)
        .fetch_optional(&self.pool);

        let row = with_deadline(self.query_timeout, select).await?;

        Ok(row.as_ref().map(row_to_user).transpose()?)
    }
}

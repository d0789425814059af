use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use super::classify;
use super::with_deadline;
use crate::domain::errors::StorageError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PasswordHash;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

pub struct PostgresUserRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

/// Rebuild a user from a row selecting `id, username, email, password_hash, created_at`.
pub(crate) fn row_to_user(row: &PgRow) -> Result<User, UserError> {
    let username: String = row.try_get("username").map_err(classify)?;
    let email: String = row.try_get("email").map_err(classify)?;
    let password_hash: String = row.try_get("password_hash").map_err(classify)?;

    Ok(User {
        id: UserId(row.try_get("id").map_err(classify)?),
        username: Username::new(username)?,
        email: EmailAddress::new(email)?,
        password_hash: PasswordHash::new(password_hash),
        created_at: row.try_get("created_at").map_err(classify)?,
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let insert = sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.created_at)
        .execute(&self.pool);

        with_deadline(self.query_timeout, insert)
            .await
            .map_err(|e| match e {
                StorageError::UniqueViolation { constraint } if constraint == USERNAME_CONSTRAINT => {
                    UserError::UsernameAlreadyExists(user.username.as_str().to_string())
                }
                StorageError::UniqueViolation { constraint } if constraint == EMAIL_CONSTRAINT => {
                    UserError::EmailAlreadyExists(user.email.as_str().to_string())
                }
                other => UserError::Storage(other),
            })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let select = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool);

        let row = with_deadline(self.query_timeout, select).await?;

        row.as_ref().map(row_to_user).transpose()
    }
}

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use super::with_deadline;
use crate::domain::like::errors::LikeError;
use crate::domain::like::models::Like;
use crate::domain::like::models::PhotoId;
use crate::domain::like::ports::LikeRepository;
use crate::domain::user::models::UserId;

pub struct PostgresLikeRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn create(&self, like: Like) -> Result<Like, LikeError> {
        // Existence check and insert in one statement; concurrent duplicates
        // fall through to DO NOTHING and return no row.
        let insert = sqlx::query(
            r#"
            INSERT INTO likes (id, photo_id, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (photo_id, user_id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(like.id.0)
        .bind(like.photo_id.0)
        .bind(like.user_id.0)
        .bind(like.created_at)
        .fetch_optional(&self.pool);

        match with_deadline(self.query_timeout, insert).await? {
            Some(_) => Ok(like),
            None => Err(LikeError::AlreadyLiked),
        }
    }

    async fn delete(&self, photo_id: PhotoId, user_id: &UserId) -> Result<bool, LikeError> {
        let delete = sqlx::query(
            r#"
            DELETE FROM likes
            WHERE photo_id = $1 AND user_id = $2
            "#,
        )
        .bind(photo_id.0)
        .bind(user_id.0)
        .execute(&self.pool);

        let result = with_deadline(self.query_timeout, delete).await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, photo_id: PhotoId) -> Result<i64, LikeError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM likes
            WHERE photo_id = $1
            "#,
        )
        .bind(photo_id.0)
        .fetch_one(&self.pool);

        Ok(with_deadline(self.query_timeout, count).await?)
    }

    async fn exists(&self, photo_id: PhotoId, user_id: &UserId) -> Result<bool, LikeError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM likes WHERE photo_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(photo_id.0)
        .bind(user_id.0)
        .fetch_one(&self.pool);

        Ok(with_deadline(self.query_timeout, exists).await?)
    }
}

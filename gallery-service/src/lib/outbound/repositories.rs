use std::future::Future;
use std::time::Duration;

use crate::domain::errors::StorageError;

pub mod like;
pub mod token;
pub mod user;

pub use like::PostgresLikeRepository;
pub use token::PostgresTokenRepository;
pub use user::PostgresUserRepository;

/// Run a query under a deadline, classifying any failure.
pub(crate) async fn with_deadline<T, F>(deadline: Duration, query: F) -> Result<T, StorageError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(deadline, query).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(sqlx::Error::PoolTimedOut)) | Err(_) => Err(StorageError::Timeout(deadline)),
        Ok(Err(e)) => Err(classify(e)),
    }
}

/// Map a driver error onto the storage taxonomy.
pub(crate) fn classify(err: sqlx::Error) -> StorageError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return StorageError::UniqueViolation {
                constraint: db_err.constraint().unwrap_or_default().to_string(),
            };
        }
    }

    StorageError::Query(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deadline_elapsed_is_timeout() {
        let deadline = Duration::from_millis(10);

        let result: Result<(), StorageError> = with_deadline(deadline, async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        assert_eq!(result, Err(StorageError::Timeout(deadline)));
    }

    #[tokio::test]
    async fn test_pool_exhaustion_is_timeout() {
        let deadline = Duration::from_secs(1);

        let result: Result<(), StorageError> =
            with_deadline(deadline, async { Err(sqlx::Error::PoolTimedOut) }).await;

        assert_eq!(result, Err(StorageError::Timeout(deadline)));
    }

    #[tokio::test]
    async fn test_other_errors_are_query_failures() {
        let result: Result<(), StorageError> = with_deadline(Duration::from_secs(1), async {
            Err(sqlx::Error::RowNotFound)
        })
        .await;

        assert!(matches!(result, Err(StorageError::Query(_))));
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let result = with_deadline(Duration::from_secs(1), async { Ok(42) }).await;
        assert_eq!(result, Ok(42));
    }
}

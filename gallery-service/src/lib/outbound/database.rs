use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Create the process-wide connection pool.
///
/// Acquiring a connection is bounded by the same deadline as queries, so an
/// exhausted pool surfaces as a timeout instead of a stalled request.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.query_timeout())
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        query_timeout_ms = config.query_timeout_ms,
        "Database pool established"
    );

    Ok(pool)
}

/// Apply pending schema migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

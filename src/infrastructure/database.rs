// Connection pool lifecycle
// One pool per process: opened at startup, migrated, closed on shutdown

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Opens the shared connection pool
pub async fn connect(config: &Config) -> Result<PgPool, DatabaseError> {
    tracing::info!(
        max_connections = config.max_connections,
        "Connecting to database..."
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(DatabaseError::Connect)?;

    tracing::info!("Database connected successfully");
    Ok(pool)
}

/// Applies the embedded migrations in `migrations/`
pub async fn migrate(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Waits for checked-out connections to return, then closes the pool
pub async fn close(pool: PgPool) {
    pool.close().await;
    tracing::info!("Database pool closed");
}

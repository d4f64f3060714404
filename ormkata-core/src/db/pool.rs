//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits.

use sqlx::migrate::Migrator;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use crate::config::DatabaseConfig;
use crate::error::DbResult;

/// Schema for the `sample` and `users` tables.
pub static MIGRATOR: Migrator = sqlx::migrate!("../migrations");

/// Create a MySQL connection pool.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::from_env()?).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> DbResult<MySqlPool> {
    let options = config.connect_options()?;

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_with(options)
        .await?;

    tracing::debug!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Apply pending migrations.
pub async fn migrate(pool: &MySqlPool) -> DbResult<()> {
    tracing::info!("Running migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}

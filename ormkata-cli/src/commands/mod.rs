//! Subcommand implementations

pub mod samples;
pub mod users;

use anyhow::{Context, Result};
use ormkata_core::{create_pool, migrate, seed, DatabaseConfig};
use serde::Serialize;
use sqlx::MySqlPool;

pub(crate) async fn connect(config: &DatabaseConfig) -> Result<MySqlPool> {
    create_pool(config)
        .await
        .context("Failed to connect to the database (check DATABASE_URL)")
}

/// Pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run_migrate(config: &DatabaseConfig) -> Result<()> {
    let pool = connect(config).await?;
    migrate(&pool).await.context("Failed to apply migrations")?;
    println!("Migrations applied");
    Ok(())
}

pub async fn run_seed(config: &DatabaseConfig) -> Result<()> {
    let pool = connect(config).await?;
    migrate(&pool).await.context("Failed to apply migrations")?;
    let (samples, users) = seed::seed(&pool).await.context("Failed to seed demo data")?;
    println!("Seeded {} samples and {} users", samples, users);
    Ok(())
}

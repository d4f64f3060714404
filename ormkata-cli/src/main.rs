//! ormkata CLI - run the database exercises against a live MySQL
//!
//! - `migrate`: create the `sample` and `users` tables
//! - `seed`: upsert the demo rows used by the exercises
//! - `samples`, `users`: inspect what is stored

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ormkata_core::DatabaseConfig;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "ormkata",
    author,
    version,
    about = "Database access exercises over sqlx and MySQL",
    long_about = "Raw SQL, row scanning, struct CRUD, transactions and query conditions \
                  against a small MySQL schema. Connection settings come from --config, \
                  DATABASE_URL or a .env file."
)]
struct Cli {
    /// TOML file with a [database] table
    #[arg(long, global = true, env = "ORMKATA_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,
    /// Apply migrations, then upsert the demo samples and users
    Seed,
    /// List rows of the sample table
    Samples(commands::samples::SamplesArgs),
    /// Query the users table
    Users(commands::users::UsersArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(err) = tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }) {
        eprintln!("warning: logging disabled: {err:#}");
    }
    tracing::debug!(command = ?cli.command, config = ?cli.config, "starting ormkata");

    let config = DatabaseConfig::load(cli.config.as_deref())
        .context("Failed to load database configuration")?;

    match cli.command {
        Commands::Migrate => commands::run_migrate(&config).await?,
        Commands::Seed => commands::run_seed(&config).await?,
        Commands::Samples(args) => commands::samples::run(&config, args).await?,
        Commands::Users(args) => commands::users::run(&config, args).await?,
    }
    Ok(())
}

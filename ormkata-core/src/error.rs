//! Error types for ormkata-core

use thiserror::Error;

pub type DbResult<T> = Result<T, DbError>;

/// Database error type
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("update of {resource} has no columns to set")]
    EmptyUpdate { resource: &'static str },

    #[error("refusing to update every {resource} row: missing WHERE condition")]
    MissingWhereClause { resource: &'static str },
}

impl DbError {
    /// True when the database rejected a write because of a duplicate key.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DbError::Sqlx(sqlx::Error::Database(db)) => db.is_unique_violation(),
            _ => false,
        }
    }

    /// True for single-row lookups that matched nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DbError::NotFound { .. } | DbError::Sqlx(sqlx::Error::RowNotFound)
        )
    }
}

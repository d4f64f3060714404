//! Sample repository
//!
//! Raw SQL exercises: statement execution, struct scanning, and two ways of
//! walking a row cursor.

use futures::TryStreamExt;
use sqlx::{Executor, FromRow, MySql, MySqlPool, Row};

use crate::db::raw;
use crate::error::{DbError, DbResult};
use crate::models::Sample;
use crate::query::SqlValue;

const SELECT_SAMPLES: &str = "SELECT id, name FROM sample ORDER BY id";

/// Insert or rename a sample.
pub async fn upsert_sample<'c, E>(executor: E, sample: &Sample) -> DbResult<u64>
where
    E: Executor<'c, Database = MySql>,
{
    raw::execute(
        executor,
        "INSERT INTO sample(id, name) VALUES (?, ?) ON DUPLICATE KEY UPDATE name = VALUES(name)",
        &[SqlValue::from(&sample.id), SqlValue::from(&sample.name)],
    )
    .await
}

/// Sample repository
pub struct SampleRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> SampleRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Plain INSERT; a duplicate id is an error.
    pub async fn insert(&self, id: impl Into<SqlValue>, name: &str) -> DbResult<u64> {
        raw::execute(
            self.pool,
            "INSERT INTO sample(id, name) VALUES (?, ?)",
            &[id.into(), SqlValue::from(name)],
        )
        .await
    }

    pub async fn upsert(&self, sample: &Sample) -> DbResult<u64> {
        upsert_sample(self.pool, sample).await
    }

    /// Raw SELECT scanned into a single struct.
    pub async fn get(&self, id: impl Into<SqlValue>) -> DbResult<Sample> {
        let id = id.into();
        raw::fetch_optional_as(
            self.pool,
            "SELECT id, name FROM sample WHERE id = ?",
            std::slice::from_ref(&id),
        )
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "sample",
            id: id.to_string(),
        })
    }

    /// Raw SELECT scanned into a list of structs.
    pub async fn list(&self) -> DbResult<Vec<Sample>> {
        raw::fetch_all_as(self.pool, SELECT_SAMPLES, &[]).await
    }

    /// Walk the cursor and read every column by name.
    pub async fn collect_rows(&self) -> DbResult<Vec<Sample>> {
        let mut rows = sqlx::query(SELECT_SAMPLES).fetch(self.pool);

        let mut samples = Vec::new();
        while let Some(row) = rows.try_next().await? {
            let id: String = row.try_get("id")?;
            let name: String = row.try_get("name")?;
            samples.push(Sample { id, name });
        }

        tracing::debug!(count = samples.len(), "collected sample rows");
        Ok(samples)
    }

    /// Walk the cursor and map each row with `FromRow`.
    pub async fn scan_rows(&self) -> DbResult<Vec<Sample>> {
        let mut rows = sqlx::query(SELECT_SAMPLES).fetch(self.pool);

        let mut samples = Vec::new();
        while let Some(row) = rows.try_next().await? {
            samples.push(Sample::from_row(&row)?);
        }

        tracing::debug!(count = samples.len(), "scanned sample rows");
        Ok(samples)
    }
}

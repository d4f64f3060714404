//! Raw SQL with positional `?` parameters
//!
//! Works against the pool or inside a transaction (`&mut *tx`).

use sqlx::mysql::MySqlRow;
use sqlx::{Executor, FromRow, MySql};

use crate::error::DbResult;
use crate::query::SqlValue;

fn bound<'q>(
    sql: &'q str,
    args: &[SqlValue],
) -> sqlx::query::Query<'q, MySql, sqlx::mysql::MySqlArguments> {
    args.iter()
        .fold(sqlx::query(sql), |query, value| value.bind_to(query))
}

/// Execute a statement, returning the number of affected rows.
pub async fn execute<'c, E>(executor: E, sql: &str, args: &[SqlValue]) -> DbResult<u64>
where
    E: Executor<'c, Database = MySql>,
{
    let result = bound(sql, args).execute(executor).await?;
    tracing::debug!(rows = result.rows_affected(), "raw statement executed");
    Ok(result.rows_affected())
}

/// Run a query and map every row into `T`.
pub async fn fetch_all_as<'c, T, E>(executor: E, sql: &str, args: &[SqlValue]) -> DbResult<Vec<T>>
where
    E: Executor<'c, Database = MySql>,
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let rows = bound(sql, args)
        .try_map(|row: MySqlRow| T::from_row(&row))
        .fetch_all(executor)
        .await?;
    Ok(rows)
}

/// Run a query and map the first row, if any, into `T`.
pub async fn fetch_optional_as<'c, T, E>(
    executor: E,
    sql: &str,
    args: &[SqlValue],
) -> DbResult<Option<T>>
where
    E: Executor<'c, Database = MySql>,
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let row = bound(sql, args)
        .try_map(|row: MySqlRow| T::from_row(&row))
        .fetch_optional(executor)
        .await?;
    Ok(row)
}

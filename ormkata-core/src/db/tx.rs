//! Closure-style transactions
//!
//! For manual control use `pool.begin()` / `tx.commit()` directly; an
//! uncommitted `sqlx::Transaction` rolls back when dropped.

use futures::future::BoxFuture;
use sqlx::{MySql, MySqlPool, Transaction};

use crate::error::DbResult;

/// Run `callback` inside a transaction.
///
/// Commits when the callback returns `Ok`, rolls back and returns the
/// callback's error otherwise.
///
/// ```ignore
/// transaction(&pool, |tx| Box::pin(async move {
///     insert_user(&mut **tx, &first).await?;
///     insert_user(&mut **tx, &second).await?;
///     Ok(())
/// }))
/// .await?;
/// ```
pub async fn transaction<F, R>(pool: &MySqlPool, callback: F) -> DbResult<R>
where
    F: for<'c> FnOnce(&'c mut Transaction<'static, MySql>) -> BoxFuture<'c, DbResult<R>> + Send,
    R: Send,
{
    let mut tx = pool.begin().await?;

    match callback(&mut tx).await {
        Ok(value) => {
            tx.commit().await?;
            tracing::debug!("transaction committed");
            Ok(value)
        }
        Err(err) => {
            tracing::warn!(error = %err, "rolling back transaction");
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}

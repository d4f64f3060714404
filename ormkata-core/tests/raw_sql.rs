//! Raw SQL execution and row scanning against the `sample` table
//!
//! Run with: DATABASE_URL=mysql://root@localhost:3306 cargo test -p ormkata-core -- --ignored

use anyhow::Result;
use ormkata_core::db::raw;
use ormkata_core::seed::{demo_samples, seed};
use ormkata_core::{DbError, Sample, SampleRepo, SqlValue};
use sqlx::MySqlPool;

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn execute_inserts_one_row_each(pool: MySqlPool) -> Result<()> {
    let repo = SampleRepo::new(&pool);

    assert_eq!(repo.insert(1, "Golang").await?, 1);
    assert_eq!(repo.insert(2, "Python").await?, 1);
    assert_eq!(repo.insert(3, "Java").await?, 1);

    assert_eq!(repo.list().await?, demo_samples());
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn execute_rejects_duplicate_id(pool: MySqlPool) -> Result<()> {
    let repo = SampleRepo::new(&pool);
    repo.insert("1", "Golang").await?;

    let err = repo.insert("1", "Rust").await.unwrap_err();
    assert!(err.is_unique_violation(), "unexpected error: {err}");
    assert_eq!(repo.get("1").await?.name, "Golang");
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn raw_select_scans_into_struct(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;
    let repo = SampleRepo::new(&pool);

    // Integer and text ids both reach the VARCHAR key
    assert_eq!(repo.get(1).await?.name, "Golang");
    assert_eq!(repo.get("2").await?, Sample::new("2", "Python"));

    let samples = repo.list().await?;
    assert_eq!(samples.len(), 3);
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn missing_sample_is_not_found(pool: MySqlPool) -> Result<()> {
    let err = SampleRepo::new(&pool).get(99).await.unwrap_err();
    assert!(
        matches!(&err, DbError::NotFound { resource: "sample", id } if id == "99"),
        "unexpected error: {err}"
    );
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn cursor_reads_columns_by_name(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;

    let samples = SampleRepo::new(&pool).collect_rows().await?;
    assert_eq!(samples, demo_samples());
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn cursor_scans_each_row_into_struct(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;

    let samples = SampleRepo::new(&pool).scan_rows().await?;
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[2], Sample::new("3", "Java"));
    Ok(())
}

#[sqlx::test(migrator = "ormkata_core::MIGRATOR")]
#[ignore = "requires MySQL (set DATABASE_URL)"]
async fn raw_helpers_take_positional_arguments(pool: MySqlPool) -> Result<()> {
    seed(&pool).await?;

    let renamed = raw::execute(
        &pool,
        "UPDATE sample SET name = ? WHERE id = ?",
        &[SqlValue::from("Rust"), SqlValue::from(3)],
    )
    .await?;
    assert_eq!(renamed, 1);

    let rows: Vec<Sample> = raw::fetch_all_as(
        &pool,
        "SELECT id, name FROM sample WHERE name LIKE ? ORDER BY id",
        &[SqlValue::from("%t%")],
    )
    .await?;
    let names: Vec<_> = rows.into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Python", "Rust"]);
    Ok(())
}

//! Demo rows shared by the CLI `seed` command and the integration tests

use sqlx::MySqlPool;

use crate::db::{save_user, transaction, upsert_sample};
use crate::error::DbResult;
use crate::models::{Name, Sample, User};

pub const DEMO_PASSWORD: &str = "rahasia";

/// `1 Golang`, `2 Python`, `3 Java`
pub fn demo_samples() -> Vec<Sample> {
    vec![
        Sample::new("1", "Golang"),
        Sample::new("2", "Python"),
        Sample::new("3", "Java"),
    ]
}

/// User `1` with a full name, `2`..`9` named `User2`..`User9`, and
/// `10`..`12` named `User 10`..`User 12`.
pub fn demo_users() -> Vec<User> {
    let mut users = vec![User::new(
        "1",
        DEMO_PASSWORD,
        Name::full("Aditya", "Jago", "Prasetyo"),
    )];
    users.extend((2..10).map(|i| {
        User::new(i.to_string(), DEMO_PASSWORD, Name::first(format!("User{}", i)))
    }));
    users.extend((10..13).map(|i| {
        User::new(i.to_string(), DEMO_PASSWORD, Name::first(format!("User {}", i)))
    }));
    users
}

/// Upsert every demo row in one transaction. Safe to run repeatedly.
pub async fn seed(pool: &MySqlPool) -> DbResult<(usize, usize)> {
    let samples = demo_samples();
    let users = demo_users();
    let counts = (samples.len(), users.len());

    transaction(pool, move |tx| {
        Box::pin(async move {
            for sample in &samples {
                upsert_sample(&mut **tx, sample).await?;
            }
            for user in &users {
                save_user(&mut **tx, user).await?;
            }
            Ok(())
        })
    })
    .await?;

    tracing::info!(samples = counts.0, users = counts.1, "seeded demo data");
    Ok(counts)
}

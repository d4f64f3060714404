//! Repository implementations for database access
//!
//! Each repository borrows the pool; write helpers that must also run inside
//! a transaction are free functions generic over `sqlx::Executor`.

pub mod samples;
pub mod users;

pub use samples::{upsert_sample, SampleRepo};
pub use users::{insert_user, insert_users, save_user, UserRepo};

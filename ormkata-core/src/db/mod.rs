//! Database layer - connection pool, raw SQL, transactions and repositories

pub mod pool;
pub mod raw;
pub mod repos;
pub mod tx;

pub use pool::{create_pool, migrate, MIGRATOR};
pub use repos::*;
pub use tx::transaction;

//! ormkata-core: database access exercises over sqlx and MySQL
//!
//! Raw SQL execution, row scanning, struct-based CRUD, transactions and
//! query conditions against two small tables (`sample`, `users`).

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod query;
pub mod seed;

pub use config::DatabaseConfig;
pub use db::{create_pool, migrate, transaction, SampleRepo, UserRepo, MIGRATOR};
pub use error::{DbError, DbResult};
pub use models::{Name, Paginated, Pagination, Sample, User, UserColumn, UserResponse};
pub use query::{Direction, Filter, SqlValue, UserQuery, UserUpdate};

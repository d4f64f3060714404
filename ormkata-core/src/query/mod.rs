//! Typed conditions rendered through `sqlx::QueryBuilder`
//!
//! Column names come from [`UserColumn`](crate::models::UserColumn); every
//! value is a bound parameter.

pub mod filter;
pub mod user_query;
pub mod value;

pub use filter::Filter;
pub use user_query::{Direction, UserQuery, UserUpdate};
pub use value::SqlValue;

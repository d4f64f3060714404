//! Record types mapped onto the exercise tables

pub mod pagination;
pub mod sample;
pub mod user;

pub use pagination::{Paginated, Pagination};
pub use sample::Sample;
pub use user::{Name, User, UserColumn, UserResponse};

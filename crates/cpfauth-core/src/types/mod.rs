//! Shared domain types.

pub mod query;
pub mod user;

pub use query::UserQuery;
pub use user::{DirectoryAttribute, DirectoryUser};

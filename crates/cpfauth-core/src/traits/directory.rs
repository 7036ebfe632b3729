//! Identity directory capability.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{DirectoryUser, UserQuery};

/// A user directory searchable by exact attribute match.
///
/// Implementations report failures with
/// [`ErrorKind::AwsConfig`](crate::error::ErrorKind::AwsConfig) when the
/// backend cannot be configured and
/// [`ErrorKind::DirectoryLookup`](crate::error::ErrorKind::DirectoryLookup)
/// when the query itself fails.
#[async_trait]
pub trait IdentityDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Short backend name for logs.
    fn provider_type(&self) -> &str;

    /// Returns up to `query.limit` users matching the query, in directory order.
    async fn list_users(&self, query: &UserQuery) -> AppResult<Vec<DirectoryUser>>;
}

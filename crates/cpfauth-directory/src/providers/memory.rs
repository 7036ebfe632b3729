//! In-memory identity directory for tests and local development.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cpfauth_core::config::SeedUser;
use cpfauth_core::result::AppResult;
use cpfauth_core::traits::IdentityDirectory;
use cpfauth_core::types::{DirectoryAttribute, DirectoryUser, UserQuery};

/// Directory holding users in process memory.
///
/// Evaluates the same exact-match query as Cognito. The pool id is ignored.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    /// Users in insertion order.
    users: Arc<RwLock<Vec<DirectoryUser>>>,
}

impl MemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory holding `users`.
    pub fn with_users(users: Vec<DirectoryUser>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Creates a directory from configured seed users.
    pub fn from_seed(seed: &[SeedUser]) -> Self {
        let users = seed
            .iter()
            .map(|s| {
                let attributes = s
                    .attributes
                    .iter()
                    .map(|(name, value)| DirectoryAttribute::new(name, value))
                    .collect();
                DirectoryUser::new(&s.username, attributes)
            })
            .collect();
        Self::with_users(users)
    }
}

#[async_trait]
impl IdentityDirectory for MemoryDirectory {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn list_users(&self, query: &UserQuery) -> AppResult<Vec<DirectoryUser>> {
        let users = self.users.read().await;
        let limit = usize::try_from(query.limit).unwrap_or(0);
        Ok(users
            .iter()
            .filter(|u| u.attribute(&query.attribute) == Some(query.value.as_str()))
            .take(limit)
            .cloned()
            .collect())
    }
}

//! Builds the configured directory provider.

use std::sync::Arc;

use cpfauth_core::config::{DirectoryConfig, DirectoryProvider};
use cpfauth_core::result::AppResult;
use cpfauth_core::traits::IdentityDirectory;

use crate::providers::MemoryDirectory;

/// Create the directory selected by `config.provider`.
pub fn create_directory(config: &DirectoryConfig) -> AppResult<Arc<dyn IdentityDirectory>> {
    match config.provider {
        #[cfg(feature = "cognito")]
        DirectoryProvider::Cognito => Ok(Arc::new(crate::providers::CognitoDirectory::new(config))),
        #[cfg(not(feature = "cognito"))]
        DirectoryProvider::Cognito => Err(cpfauth_core::error::AppError::configuration(
            "Cognito provider requires the `cognito` feature",
        )),
        DirectoryProvider::Memory => {
            if config.users.is_empty() {
                tracing::warn!("Memory directory configured without users");
            }
            Ok(Arc::new(MemoryDirectory::from_seed(&config.users)))
        }
    }
}

//! Token issuance configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Signing key used when no secret is configured.
///
/// This key is publicly known; tokens signed with it are forgeable.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key";

/// Token signing configuration.
///
/// Token lifetime is fixed at 24 hours and is not configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Refuse to start when `jwt_secret` is unset instead of falling back
    /// to [`DEFAULT_JWT_SECRET`].
    #[serde(default)]
    pub require_secret: bool,
}

impl AuthConfig {
    /// The effective signing secret.
    pub fn signing_secret(&self) -> &str {
        self.jwt_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_JWT_SECRET)
    }

    /// Whether signing falls back to the built-in default key.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret.as_deref().is_none_or(str::is_empty)
    }

    /// Checks startup invariants.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.require_secret && self.uses_default_secret() {
            return Err(AppError::configuration(
                "auth.require_secret is set but JWT_SECRET is not configured",
            ));
        }
        Ok(())
    }
}

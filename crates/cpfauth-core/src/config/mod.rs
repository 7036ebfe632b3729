//! Application configuration schemas.
//!
//! Configuration is built once at process start from layered sources via
//! the `config` crate and injected into the request handler. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod directory;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::auth::AuthConfig;
pub use self::directory::{DirectoryConfig, DirectoryProvider, SeedUser};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Prefix for structured environment overrides (`CPFAUTH__SERVER__PORT`).
const ENV_PREFIX: &str = "CPFAUTH";

/// Legacy variable holding the Cognito user pool id.
pub const USER_POOL_ID_VAR: &str = "COGNITO_USER_POOL_ID";

/// Legacy variable holding the token signing secret.
pub const JWT_SECRET_VAR: &str = "JWT_SECRET";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Token issuance settings.
    pub auth: AuthConfig,
    /// Identity directory settings.
    pub directory: DirectoryConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// The environment overlay file is selected by `CPFAUTH_ENV`
    /// (default `development`).
    pub fn load() -> Result<Self, AppError> {
        let vars: config::Map<String, String> = std::env::vars().collect();
        let env = vars
            .get("CPFAUTH_ENV")
            .cloned()
            .unwrap_or_else(|| "development".to_string());
        Self::load_from(&env, vars)
    }

    /// Load configuration from an explicit variable map.
    ///
    /// Sources, lowest precedence first:
    /// 1. `config/default` (optional)
    /// 2. `config/{env}` (optional)
    /// 3. `CPFAUTH__*` variables
    /// 4. `COGNITO_USER_POOL_ID` and `JWT_SECRET`
    ///
    /// Empty legacy variables count as unset.
    pub fn load_from(
        env: &str,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, AppError> {
        let vars: config::Map<String, String> = vars.into_iter().collect();
        let user_pool_id = non_empty(&vars, USER_POOL_ID_VAR);
        let jwt_secret = non_empty(&vars, JWT_SECRET_VAR);

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("directory.user_pool_id", user_pool_id)?
            .set_override_option("auth.jwt_secret", jwt_secret)?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.auth.validate()?;
        Ok(loaded)
    }
}

fn non_empty(vars: &config::Map<String, String>, key: &str) -> Option<String> {
    vars.get(key).filter(|v| !v.is_empty()).cloned()
}

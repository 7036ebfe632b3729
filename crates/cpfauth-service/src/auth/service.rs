//! Resolves a CPF to a directory user and issues a token for it.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use cpfauth_auth::jwt::{Claims, TokenSigner, token_ttl};
use cpfauth_core::config::{AppConfig, USER_POOL_ID_VAR};
use cpfauth_core::error::AppError;
use cpfauth_core::result::AppResult;
use cpfauth_core::traits::IdentityDirectory;
use cpfauth_core::types::UserQuery;

/// Outcome of a successful authentication.
#[derive(Debug, Clone)]
pub struct Authentication {
    /// Directory username of the matched user.
    pub username: String,
    /// The CPF as submitted.
    pub cpf: String,
    /// Flattened directory attributes.
    pub attributes: BTreeMap<String, String>,
    /// Signed bearer token.
    pub token: String,
    /// Claims embedded in `token`.
    pub claims: Claims,
}

/// CPF authentication service.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Identity directory.
    directory: Arc<dyn IdentityDirectory>,
    /// Token signer.
    signer: Arc<dyn TokenSigner>,
    /// User pool searched; `None` when unconfigured.
    user_pool_id: Option<String>,
    /// Attribute matched against the CPF.
    lookup_attribute: String,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        config: &AppConfig,
        directory: Arc<dyn IdentityDirectory>,
        signer: Arc<dyn TokenSigner>,
    ) -> Self {
        Self {
            directory,
            signer,
            user_pool_id: config
                .directory
                .user_pool_id
                .clone()
                .filter(|id| !id.is_empty()),
            lookup_attribute: config.directory.lookup_attribute.clone(),
        }
    }

    /// Authenticates `cpf`.
    ///
    /// Order of checks: pool id configured, directory reachable, at least
    /// one match, token signed. Only the first matching user is used.
    pub async fn authenticate(&self, cpf: &str) -> AppResult<Authentication> {
        if cpf.is_empty() {
            return Err(AppError::missing_cpf());
        }

        let pool_id = self.user_pool_id.as_deref().ok_or_else(|| {
            tracing::error!("{USER_POOL_ID_VAR} is not configured");
            AppError::server_config(format!("{USER_POOL_ID_VAR} is not set"))
        })?;

        let query = UserQuery::exact(pool_id, &self.lookup_attribute, cpf);
        info!(
            provider = self.directory.provider_type(),
            user_pool_id = %query.pool_id,
            filter = %query.filter_expression(),
            limit = query.limit,
            "Searching directory user"
        );

        let users = self.directory.list_users(&query).await.inspect_err(|e| {
            warn!(code = e.kind.code(), details = ?e.details, "Directory lookup failed");
        })?;

        let Some(user) = users.into_iter().next() else {
            info!("No directory user matched");
            return Err(AppError::user_not_found());
        };
        info!(username = %user.username, "Directory user found");

        let claims = Claims::issue(&user.username, cpf, Utc::now(), token_ttl());
        let token = self.signer.sign(&claims).inspect_err(|e| {
            tracing::error!(details = ?e.details, "Token signing failed");
        })?;
        info!(username = %user.username, exp = claims.exp, "Token issued");

        Ok(Authentication {
            attributes: user.attribute_map(),
            username: user.username,
            cpf: cpf.to_string(),
            token,
            claims,
        })
    }
}

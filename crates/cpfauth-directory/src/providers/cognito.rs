//! AWS Cognito user pool directory.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_cognitoidentityprovider::Client;
use aws_sdk_cognitoidentityprovider::error::DisplayErrorContext;
use aws_sdk_cognitoidentityprovider::types::UserType;
use tokio::sync::OnceCell;

use cpfauth_core::config::DirectoryConfig;
use cpfauth_core::error::AppError;
use cpfauth_core::result::AppResult;
use cpfauth_core::traits::IdentityDirectory;
use cpfauth_core::types::{DirectoryAttribute, DirectoryUser, UserQuery};

/// Cognito-backed identity directory.
///
/// The SDK configuration is resolved through the default provider chain on
/// first use. A failed resolution is not cached.
#[derive(Debug)]
pub struct CognitoDirectory {
    /// Region override.
    region: Option<String>,
    /// Endpoint override.
    endpoint_url: Option<String>,
    /// Lazily built SDK client.
    client: OnceCell<Client>,
}

impl CognitoDirectory {
    /// Create a directory from configuration. No AWS calls are made here.
    pub fn new(config: &DirectoryConfig) -> Self {
        tracing::info!(
            region = config.region.as_deref().unwrap_or("<default chain>"),
            endpoint = config.endpoint_url.as_deref().unwrap_or("<default>"),
            "Initializing Cognito directory provider"
        );
        Self {
            region: config.region.clone(),
            endpoint_url: config.endpoint_url.clone(),
            client: OnceCell::new(),
        }
    }

    /// Create a directory around an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self {
            region: None,
            endpoint_url: None,
            client: OnceCell::new_with(Some(client)),
        }
    }

    async fn client(&self) -> AppResult<&Client> {
        self.client.get_or_try_init(|| self.build_client()).await
    }

    async fn build_client(&self) -> AppResult<Client> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;
        check_sdk_config(&sdk_config)?;

        tracing::debug!(region = ?sdk_config.region(), "AWS configuration resolved");
        Ok(Client::new(&sdk_config))
    }
}

/// Rejects a resolved configuration the client cannot be built from.
fn check_sdk_config(sdk_config: &SdkConfig) -> AppResult<()> {
    if sdk_config.region().is_none() {
        return Err(AppError::aws_config(
            "no AWS region resolved; set AWS_REGION or directory.region",
        ));
    }
    Ok(())
}

#[async_trait]
impl IdentityDirectory for CognitoDirectory {
    fn provider_type(&self) -> &str {
        "cognito"
    }

    async fn list_users(&self, query: &UserQuery) -> AppResult<Vec<DirectoryUser>> {
        let client = self.client().await?;

        let output = client
            .list_users()
            .user_pool_id(&query.pool_id)
            .filter(query.filter_expression())
            .limit(query.limit)
            .send()
            .await
            .map_err(|e| AppError::directory_lookup(DisplayErrorContext(&e).to_string()))?;

        Ok(output.users().iter().map(to_directory_user).collect())
    }
}

fn to_directory_user(user: &UserType) -> DirectoryUser {
    let attributes = user
        .attributes()
        .iter()
        .map(|a| DirectoryAttribute::new(a.name(), a.value().unwrap_or_default()))
        .collect();
    DirectoryUser::new(user.username().unwrap_or_default(), attributes)
}

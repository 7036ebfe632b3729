//! Shared test helpers for integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use cpfauth_auth::jwt::{Claims, JwtEncoder, TokenSigner};
use cpfauth_core::config::AppConfig;
use cpfauth_core::error::AppError;
use cpfauth_core::result::AppResult;
use cpfauth_core::traits::IdentityDirectory;
use cpfauth_core::types::{DirectoryAttribute, DirectoryUser, UserQuery};
use cpfauth_directory::providers::MemoryDirectory;

/// Secret used by test applications.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// Captured response
pub struct TestResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body text
    pub text: String,
    /// Parsed JSON body
    pub body: Value,
}

impl TestApp {
    /// Application over a memory directory holding the example user.
    pub fn new() -> Self {
        Self::with_directory(Arc::new(example_directory()))
    }

    /// Application over `directory` with a configured pool and secret.
    pub fn with_directory(directory: Arc<dyn IdentityDirectory>) -> Self {
        Self::build(test_config(), directory, None)
    }

    /// Application with explicit parts; `signer` defaults to a `JwtEncoder`.
    pub fn build(
        config: AppConfig,
        directory: Arc<dyn IdentityDirectory>,
        signer: Option<Arc<dyn TokenSigner>>,
    ) -> Self {
        let signer: Arc<dyn TokenSigner> = match signer {
            Some(signer) => signer,
            None => Arc::new(JwtEncoder::new(&config.auth)),
        };
        let router = cpfauth_api::build_app(&config, directory, signer);
        Self { router }
    }

    /// Send a request
    pub async fn request(&self, method: &str, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("response");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let text = String::from_utf8(bytes.to_vec()).expect("utf-8 body");
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            text,
            body,
        }
    }

    /// POST a JSON body to the auth route
    pub async fn post(&self, body: &str) -> TestResponse {
        self.request("POST", "/", body).await
    }
}

/// Config with a pool id and a known secret.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.directory.user_pool_id = Some("us-east-1_TestPool".into());
    config.auth.jwt_secret = Some(TEST_SECRET.into());
    config
}

/// The end-to-end example user.
pub fn example_user() -> DirectoryUser {
    DirectoryUser::new(
        "u-123",
        vec![
            DirectoryAttribute::new("preferred_username", "12345678900"),
            DirectoryAttribute::new("email", "a@b.com"),
        ],
    )
}

/// Memory directory holding [`example_user`].
pub fn example_directory() -> MemoryDirectory {
    MemoryDirectory::with_users(vec![example_user()])
}

/// Directory returning fixed users for any query and recording the queries.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    /// Users returned for every query.
    pub users: Vec<DirectoryUser>,
    /// Queries received.
    pub queries: Mutex<Vec<UserQuery>>,
}

impl StaticDirectory {
    /// Directory answering every query with `users`.
    pub fn new(users: Vec<DirectoryUser>) -> Self {
        Self {
            users,
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl IdentityDirectory for StaticDirectory {
    fn provider_type(&self) -> &str {
        "static"
    }

    async fn list_users(&self, query: &UserQuery) -> AppResult<Vec<DirectoryUser>> {
        self.queries.lock().expect("lock").push(query.clone());
        Ok(self.users.clone())
    }
}

/// Directory that always fails with the given error.
#[derive(Debug)]
pub struct FailingDirectory(pub AppError);

#[async_trait]
impl IdentityDirectory for FailingDirectory {
    fn provider_type(&self) -> &str {
        "failing"
    }

    async fn list_users(&self, _query: &UserQuery) -> AppResult<Vec<DirectoryUser>> {
        Err(self.0.clone())
    }
}

/// Signer that always fails.
#[derive(Debug)]
pub struct FailingSigner;

impl TokenSigner for FailingSigner {
    fn sign(&self, _claims: &Claims) -> AppResult<String> {
        Err(AppError::token_sign("key rejected"))
    }
}

/// Asserts the four fixed headers are present.
pub fn assert_cors_headers(response: &TestResponse) {
    let expected = [
        ("content-type", "application/json"),
        ("access-control-allow-origin", "*"),
        ("access-control-allow-headers", "Content-Type"),
        ("access-control-allow-methods", "POST, OPTIONS"),
    ];
    for (name, value) in expected {
        assert_eq!(
            response.headers.get(name).and_then(|v| v.to_str().ok()),
            Some(value),
            "header {name}"
        );
    }
}

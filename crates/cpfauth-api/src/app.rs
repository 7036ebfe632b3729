//! Application builder. Wires router, middleware, and state into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use cpfauth_auth::jwt::TokenSigner;
use cpfauth_core::config::AppConfig;
use cpfauth_core::traits::IdentityDirectory;
use cpfauth_service::AuthService;

use crate::middleware::with_response_headers;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete application from configuration and capabilities.
pub fn build_app(
    config: &AppConfig,
    directory: Arc<dyn IdentityDirectory>,
    signer: Arc<dyn TokenSigner>,
) -> Router {
    let auth_service = Arc::new(AuthService::new(config, directory, signer));

    with_response_headers(build_router(AppState::new(auth_service)))
        .layer(TraceLayer::new_for_http())
}

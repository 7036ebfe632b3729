//! Route table.

use axum::Router;
use axum::routing::any;

use crate::handlers::auth;
use crate::state::AppState;

/// Builds the router. The authentication handler serves every path, as
/// behind a function gateway.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(auth::authenticate))
        .fallback(auth::authenticate)
        .with_state(state)
}

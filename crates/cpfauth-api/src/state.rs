//! Shared application state.

use std::sync::Arc;

use cpfauth_service::AuthService;

/// State injected into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Authentication use case.
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Creates application state.
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }
}

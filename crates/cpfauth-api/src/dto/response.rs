//! Response DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cpfauth_service::Authentication;

/// Message returned on successful authentication.
pub const AUTH_SUCCESS_MESSAGE: &str = "Authentication successful! JWT token generated.";

/// Lifetime label of every issued token.
pub const TOKEN_EXPIRES_IN: &str = "24h";

/// Message returned for CORS preflight requests.
pub const PREFLIGHT_MESSAGE: &str = "CORS preflight";

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

/// Successful authentication envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Fixed success message.
    pub message: String,
    /// Directory username.
    pub username: String,
    /// The CPF as submitted.
    pub cpf: String,
    /// Directory attributes.
    pub attributes: BTreeMap<String, String>,
    /// Signed bearer token.
    pub token: String,
    /// Token lifetime label.
    pub expires_in: String,
}

impl From<Authentication> for AuthResponse {
    fn from(auth: Authentication) -> Self {
        Self {
            message: AUTH_SUCCESS_MESSAGE.to_string(),
            username: auth.username,
            cpf: auth.cpf,
            attributes: auth.attributes,
            token: auth.token,
            expires_in: TOKEN_EXPIRES_IN.to_string(),
        }
    }
}

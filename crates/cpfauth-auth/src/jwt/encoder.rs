//! JWT token creation with HMAC-SHA256 signing.

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use cpfauth_core::config::AuthConfig;
use cpfauth_core::error::AppError;
use cpfauth_core::result::AppResult;

use super::TokenSigner;
use super::claims::Claims;

/// Creates signed identity tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Falls back to the built-in default key when no secret is configured.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(config.signing_secret().as_bytes())
    }

    /// Creates an encoder for an explicit secret.
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
        }
    }
}

impl TokenSigner for JwtEncoder {
    fn sign(&self, claims: &Claims) -> AppResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::token_sign(format!("Failed to encode token: {e}")))
    }
}

//! JWT token encoding, decoding, and claims management.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;

use cpfauth_core::result::AppResult;

/// Lifetime of every issued token, in hours.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Lifetime of every issued token.
pub fn token_ttl() -> chrono::Duration {
    chrono::Duration::hours(TOKEN_TTL_HOURS)
}

/// Signs identity claims into a bearer token.
pub trait TokenSigner: Send + Sync + std::fmt::Debug + 'static {
    /// Signs the claims.
    fn sign(&self, claims: &Claims) -> AppResult<String>;
}

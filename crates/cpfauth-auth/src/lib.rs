//! # cpfauth-auth
//!
//! Token issuance for CPF Auth.
//!
//! ## Modules
//!
//! - `jwt`: claims, HMAC-SHA256 signing, and verification

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenSigner};

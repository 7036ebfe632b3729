//! CPF authentication.

pub mod service;

pub use service::{AuthService, Authentication};

//! # cpfauth-service
//!
//! Business logic for CPF Auth. `AuthService` resolves a CPF against the
//! identity directory and issues a signed token for the matched user.
//!
//! Dependencies are injected at construction time via `Arc` references.

pub mod auth;

pub use auth::{AuthService, Authentication};

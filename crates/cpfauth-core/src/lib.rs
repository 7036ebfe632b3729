//! # cpfauth-core
//!
//! Core crate for CPF Auth. Contains configuration schemas, the unified
//! error system, identity-directory types, and the directory capability
//! trait.
//!
//! This crate has **no** internal dependencies on other CPF Auth crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;

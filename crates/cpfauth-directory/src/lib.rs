//! # cpfauth-directory
//!
//! Identity directory implementations for CPF Auth: an AWS Cognito user
//! pool client and an in-memory directory for tests and local runs.

pub mod factory;
pub mod providers;

pub use factory::create_directory;

//! Directory provider implementations.

#[cfg(feature = "cognito")]
pub mod cognito;
pub mod memory;

#[cfg(feature = "cognito")]
pub use cognito::CognitoDirectory;
pub use memory::MemoryDirectory;

//! Capability traits implemented by backend crates.

pub mod directory;

pub use directory::IdentityDirectory;

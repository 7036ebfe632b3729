//! Request and response bodies.

pub mod request;
pub mod response;

pub use request::AuthRequest;
pub use response::{AuthResponse, MessageResponse};

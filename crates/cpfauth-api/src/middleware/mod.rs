//! HTTP middleware.

pub mod cors;

pub use cors::with_response_headers;

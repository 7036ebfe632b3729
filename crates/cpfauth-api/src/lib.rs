//! # cpfauth-api
//!
//! HTTP layer for CPF Auth built on Axum. Every response, success or
//! error, is a JSON envelope carrying the fixed CORS headers.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;

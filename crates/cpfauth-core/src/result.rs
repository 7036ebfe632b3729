//! Convenience result type alias for CPF Auth.

use crate::error::AppError;

/// A specialized `Result` type for CPF Auth operations.
pub type AppResult<T> = Result<T, AppError>;

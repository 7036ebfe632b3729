//! Maps domain `AppError` to HTTP error envelopes.
//!
//! [`ApiError`] wraps an [`AppError`] so the HTTP layer can own its
//! `IntoResponse` impl.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use cpfauth_core::error::AppError;

/// Error envelope body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Machine-readable error code.
    pub code: String,
    /// Optional diagnostic details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&AppError> for ApiErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.message.clone(),
            code: err.kind.code().to_string(),
            details: err.details.clone(),
        }
    }
}

/// Handler error rendered as an [`ApiErrorResponse`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if err.kind.is_server_error() {
            tracing::error!(code = err.kind.code(), details = ?err.details, "{}", err.message);
        } else {
            tracing::warn!(code = err.kind.code(), "{}", err.message);
        }

        (status, Json(ApiErrorResponse::from(&err))).into_response()
    }
}

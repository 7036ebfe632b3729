//! CPF authentication handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use cpfauth_core::error::AppError;

use crate::dto::request::AuthRequest;
use crate::dto::response::{AuthResponse, MessageResponse, PREFLIGHT_MESSAGE};
use crate::error::ApiError;
use crate::state::AppState;

/// Any method, any path.
///
/// `OPTIONS` short-circuits as a CORS preflight; every other method runs
/// the authentication flow on the JSON body.
pub async fn authenticate(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    if method == Method::OPTIONS {
        return Ok(preflight());
    }

    let body = body.map_err(|e| AppError::invalid_body(e.body_text()))?;
    let request = AuthRequest::from_body(&body)?;
    let cpf = request.require_cpf()?;

    let authentication = state.auth_service.authenticate(cpf).await?;

    Ok((StatusCode::OK, Json(AuthResponse::from(authentication))).into_response())
}

fn preflight() -> Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: PREFLIGHT_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

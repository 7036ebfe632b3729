//! Fixed CORS and content-type headers stamped on every response.
//!
//! Preflight bodies come from the handler, so no `CorsLayer` is installed.

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE, HeaderName,
};
use tower_http::set_header::SetResponseHeaderLayer;

/// Headers carried by every response, success or error.
pub const RESPONSE_HEADERS: [(HeaderName, &str); 4] = [
    (CONTENT_TYPE, "application/json"),
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
];

/// Layers `router` so each of [`RESPONSE_HEADERS`] overrides whatever the
/// handler set.
pub fn with_response_headers(router: Router) -> Router {
    RESPONSE_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(
                name,
                HeaderValue::from_static(value),
            ))
        })
}

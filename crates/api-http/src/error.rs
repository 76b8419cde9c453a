//! HTTP Error Mapping
//!
//! Maps application errors to HTTP responses for the pre-dispatch path
//! (envelope validation). Errors raised while handling a dispatched
//! intent never take this path: those end the turn with a spoken apology.

use axum::http::StatusCode;
use jobjar_core::error::AppError;

/// Convert AppError to an HTTP status and plain-text message
pub fn to_http_error(err: AppError) -> (StatusCode, String) {
    match err {
        AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        AppError::Serialization(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        AppError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        AppError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
    }
}

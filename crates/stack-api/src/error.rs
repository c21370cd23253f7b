//! Maps domain `AppError` to RPC responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use stack_core::error::{AppError, ErrorKind};

/// Standard RPC error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable status code, e.g. `"unauthenticated"`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Transport wrapper turning an [`AppError`] into a response.
///
/// Only the error's `message` is sent; its `source` stays server-side. A
/// copy of the error rides in the response extensions for request logging.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Returns the HTTP status and RPC code for an error kind.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
        ErrorKind::AlreadyExists => (StatusCode::CONFLICT, "already_exists"),
        ErrorKind::Unauthenticated => (StatusCode::UNAUTHORIZED, "unauthenticated"),
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "invalid_argument"),
        ErrorKind::Unimplemented => (StatusCode::NOT_IMPLEMENTED, "unimplemented"),
        ErrorKind::Internal | ErrorKind::Configuration => {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal")
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, code) = status_for(err.kind);

        let message = match err.kind {
            ErrorKind::Internal | ErrorKind::Configuration => "internal error".to_string(),
            _ => err.message.clone(),
        };

        let body = ApiErrorResponse {
            code: code.to_string(),
            message,
        };

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(err);
        response
    }
}

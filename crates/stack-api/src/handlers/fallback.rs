//! Answer for methods no service in this process registered.

use axum::http::Uri;

use stack_core::error::AppError;

use crate::error::ApiError;

/// Any unrouted method.
pub async fn unimplemented(uri: Uri) -> ApiError {
    ApiError(AppError::unimplemented(format!(
        "method {} not implemented",
        uri.path()
    )))
}

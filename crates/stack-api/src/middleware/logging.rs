//! Request/response logging middleware.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info};

use stack_core::error::AppError;

/// Logs client, method, status, and latency of every call. Failed calls are
/// logged at `error` with the [`AppError`] the handler or interceptor returned.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.uri().path().to_owned();
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.to_string())
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    if let Some(err) = response.extensions().get::<AppError>() {
        error!(
            client = %client,
            method = %method,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            error = %err,
            "RPC call"
        );
    } else {
        info!(
            client = %client,
            method = %method,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "RPC call"
        );
    }

    response
}

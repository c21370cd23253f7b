//! Route definitions for the stackd RPC surface.
//!
//! Only the Login method is served here. Business services are external
//! and merge their own routes; anything unrouted answers `unimplemented`.
//! All routes and the fallback sit behind the authorization middleware.

use std::time::Duration;

use axum::http::StatusCode;
use axum::{Router, middleware as axum_middleware, routing::post};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use stack_auth::LOGIN_METHOD;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    build_router_with(state, Router::new())
}

/// Same as [`build_router`], additionally serving `services`.
///
/// The extra routes get the same authorization and logging layers as Login.
pub fn build_router_with(state: AppState, services: Router<AppState>) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .merge(auth_routes())
        .merge(services)
        .fallback(handlers::fallback::unimplemented)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::authorize,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `stack.v1.AuthService`
fn auth_routes() -> Router<AppState> {
    Router::new().route(LOGIN_METHOD, post(handlers::auth::login))
}

//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use stack_auth::AuthService;
use stack_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Token issuance, Login, and the per-call interceptor
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(config: AppConfig, auth: AuthService) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
        }
    }
}

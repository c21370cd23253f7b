//! stackd: Stack Server
//!
//! Main entry point that wires configuration, logging, the authentication
//! subsystem and the RPC router together and starts serving.

use std::net::SocketAddr;

use tracing_subscriber::{EnvFilter, fmt};

use stack_api::{AppState, build_router};
use stack_auth::AuthService;
use stack_core::config::AppConfig;
use stack_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and `STACKD__*` environment variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("STACKD_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting stackd v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Authentication ───────────────────────────────────
    if config.auth.admin_password.is_none() {
        tracing::warn!(
            "No bootstrap admin password configured; Login requires an external credential store"
        );
    }
    let auth = AuthService::from_config(&config.auth)?;
    tracing::info!(
        ttl_seconds = auth.tokens().ttl().num_seconds(),
        exempt_methods = auth.interceptor().skip_set().len(),
        "Authentication initialized"
    );

    // ── Step 2: Router ───────────────────────────────────────────
    let bind_address = config.server.bind_address();
    let state = AppState::new(config, auth);
    let app = build_router(state);

    // ── Step 3: Serve ────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", bind_address, e)))?;
    tracing::info!("Listening on {}", bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

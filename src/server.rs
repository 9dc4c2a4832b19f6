//! Server startup and shutdown logic.
//!
//! `run_server` resolves the CORS policy from configuration, builds the
//! router with the CORS layer at highest precedence, binds the listener and
//! serves until a shutdown signal arrives.

use crate::config::Config;
use crate::cors;
use crate::error::{AppError, AppResult};
use crate::routes;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server with the given configuration.
///
/// # Errors
///
/// This function will return an error if:
/// - The resolved CORS policy cannot be installed
/// - Server binding fails
/// - Server runtime error occurs
pub async fn run_server(config: Config, addr: String) -> AppResult<()> {
    info!("Starting hoc-cors server...");

    let policy = cors::resolve(&config.cors);
    info!(
        allowed_origins = ?policy.allowed_origins,
        allowed_methods = ?policy.allowed_methods,
        allowed_headers = ?policy.allowed_headers,
        allow_credentials = policy.allow_credentials,
        "CORS policy resolved"
    );

    let app = routes::create_router(&policy)?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(create_shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C.
///
/// # Panics
///
/// Panics if signal handler installation fails; without it graceful shutdown
/// is impossible.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}

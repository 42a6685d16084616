//! Server startup and shutdown logic.
//!
//! This module contains the `run_server` function which handles:
//! - Connection pool construction
//! - Application state creation
//! - Router creation
//! - Server binding and graceful shutdown

use crate::config::Config;
use crate::db::Repository;
use crate::error::{AppError, AppResult};
use crate::routes;
use crate::service::PokemonService;
use crate::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server with the given configuration.
///
/// Builds the connection pool, wires the retrieval service and router,
/// binds the listener, and serves until a shutdown signal arrives. Any
/// failure before serving is a startup error; the entry point decides
/// whether to abort the process.
pub async fn run_server(config: Config, addr: String) -> AppResult<()> {
    info!("Starting pokeverse server...");

    // Initialize database connection pool
    info!("Connecting to database...");
    let repository = Repository::new(
        &config.database.connect_url(),
        config.database.max_connections,
        config.database.acquire_timeout_seconds,
    )
    .await?;

    // Create application state
    let service = PokemonService::new(Arc::new(repository));
    let state = Arc::new(AppState { service });

    // Create router
    let app = routes::create_router(state);

    // Start server
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);

    // Run server with graceful shutdown
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
/// Panics if signal handler installation fails. Signal handler failures
/// are unrecoverable system-level errors that make graceful shutdown
/// impossible.
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

//! HTTP server initialization and runtime setup.
//!
//! Builds the backend client, the store and the navigation table, then runs
//! the Axum host until Ctrl+C.

use crate::config::Config;
use crate::infrastructure::HttpDomainBackend;
use crate::navigation::NavigationTable;
use crate::routes::app_router;
use crate::state::AppState;
use crate::store::{BackendStatus, LookupStore};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The backend client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
///
/// An unreachable backend is not an error: it is logged and reported by `/health`.
pub async fn run(config: Config) -> Result<()> {
    let backend = HttpDomainBackend::new(config.backend()?, config.request_timeout())
        .context("Failed to build backend client")?;
    tracing::info!("Backend client ready: {}", backend.base_url());

    let store = Arc::new(LookupStore::new(Arc::new(backend)));
    match store.check_backend().await {
        BackendStatus::Online => tracing::info!("Backend is online"),
        _ => tracing::warn!("Backend is not reachable yet; lookups will fail until it is"),
    }

    let navigation = Arc::new(NavigationTable::new(&config.base_path));
    let state = AppState::new(store, navigation);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

//! HTTP surface for the todo service.
//!
//! Exposes the REST routes under `/api/todos`, a liveness probe at
//! `/health`, and the server loop with graceful shutdown.

mod error;
mod routes;

pub use error::ApiError;
pub use routes::build_router;

use axum::Router;
use std::future::Future;

/// Binds `addr` and serves `app` until the process receives Ctrl-C.
///
/// # Errors
///
/// Returns an I/O error when the listener cannot bind or the server loop
/// fails.
pub async fn serve(addr: &str, app: Router) -> std::io::Result<()> {
    serve_with_shutdown(addr, app, shutdown_signal()).await
}

/// Binds `addr` and serves `app` until `shutdown` completes, then drains
/// in-flight requests before returning.
///
/// # Errors
///
/// Returns an I/O error when the listener cannot bind or the server loop
/// fails.
pub async fn serve_with_shutdown<F>(addr: &str, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}

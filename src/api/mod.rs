use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::pipeline::VideoSearchPipeline;

pub mod handlers;
pub mod models;

pub fn create_router(pipeline: Arc<VideoSearchPipeline>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/search", post(handlers::search_handler))
        .route("/health", get(handlers::health_handler))
        .with_state(pipeline)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serve the api until Ctrl-C.
pub async fn serve(pipeline: Arc<VideoSearchPipeline>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(pipeline))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await
}

async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("shutting down"),
        Err(e) => {
            // Without a handler the server keeps running until killed.
            error!("failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_shutdown_on_signal() {
        let done = timeout(Duration::from_millis(200), wait_for_shutdown(async { Ok(()) })).await;
        assert!(done.is_ok());
    }

    #[tokio::test]
    async fn test_broken_signal_handler_keeps_serving() {
        let signal = async { Err(std::io::Error::other("signal handler unavailable")) };
        let done = timeout(Duration::from_millis(100), wait_for_shutdown(signal)).await;
        assert!(done.is_err(), "server must not shut down when Ctrl-C can't be watched");
    }
}

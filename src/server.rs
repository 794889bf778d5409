//! HTTP Server
//!
//! Builds the Axum router and runs it. Shared components are handed to handlers
//! through `Extension` layers.

use crate::simulation::engine::SimulationEngine;
use crate::simulation::handlers::{ReadingDuration, handle_simulate};
use crate::simulation::protocol::ENDPOINT_SIMULATE;

use anyhow::{Context, Result};
use axum::{Extension, Router, routing::post};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

pub fn app(engine: Arc<SimulationEngine>, reading_duration: Duration) -> Router {
    Router::new()
        .route(ENDPOINT_SIMULATE, post(handle_simulate))
        .layer(Extension(engine))
        .layer(Extension(ReadingDuration(reading_duration)))
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", addr))
}

/// Serves `app` on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    let local_addr = listener.local_addr()?;
    tracing::info!("HTTP server listening on {}", local_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

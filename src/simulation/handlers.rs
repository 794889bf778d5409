use super::engine::SimulationEngine;
use super::protocol::SimulateRequest;

use axum::body::Bytes;
use axum::{Extension, Json, http::StatusCode};
use std::sync::Arc;
use std::time::Duration;

/// Reading time applied to every book of a request, shared with handlers as an extension.
#[derive(Debug, Clone, Copy)]
pub struct ReadingDuration(pub Duration);

/// Runs one simulation batch.
///
/// The body is decoded as JSON whatever its `Content-Type` says.
pub async fn handle_simulate(
    Extension(engine): Extension<Arc<SimulationEngine>>,
    Extension(ReadingDuration(duration)): Extension<ReadingDuration>,
    body: Bytes,
) -> Result<Json<Vec<String>>, (StatusCode, String)> {
    let req: SimulateRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Error decoding simulate payload: {}", e);
        (
            StatusCode::BAD_REQUEST,
            "Invalid request payload".to_string(),
        )
    })?;

    if req.book_ids.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "No book IDs provided".to_string(),
        ));
    }

    let results = engine.simulate_multiple(&req.book_ids, duration).await;
    Ok(Json(results))
}

//! # HTTP Handlers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /receipts/process                                                 │
//! │    body bytes ─► serde_json ─► Receipt ─► store.put ─► {"id": ...}      │
//! │                      │                                                  │
//! │                      └─ error ─► 400, decoder message                   │
//! │                                                                         │
//! │  GET /receipt/{id}/points                                               │
//! │    id ─► store.get ─► compute_points ─► {"points": ...}                 │
//! │             │                                                           │
//! │             └─ miss ─► MissingReceiptPolicy                             │
//! │                          NotFound   ─► 404                              │
//! │                          ScoreEmpty ─► score Receipt::default()         │
//! │                                                                         │
//! │  GET /health ─► {"status": "ok", "receipts": n}                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use points_core::{PointsBreakdown, Receipt};
use points_store::StoreError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::MissingReceiptPolicy;
use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Response Bodies
// =============================================================================

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Body of a successful `GET /receipt/{id}/points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /receipts/process`
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that any decode failure, including a missing content type, is a 400
/// carrying the decoder's message.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessReceiptResponse>, ApiError> {
    let receipt: Receipt = serde_json::from_slice(&body).map_err(ApiError::decode)?;
    let id = state.store.put(receipt).await?;
    Ok(Json(ProcessReceiptResponse { id }))
}

/// `GET /receipt/{id}/points`
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let receipt = match state.store.get(&id).await {
        Ok(stored) => stored.receipt,
        Err(StoreError::NotFound { .. })
            if state.config.missing_receipt == MissingReceiptPolicy::ScoreEmpty =>
        {
            warn!(id = %id, "Unknown receipt id, scoring an empty receipt");
            Receipt::default()
        }
        Err(e) => return Err(e.into()),
    };

    let breakdown = PointsBreakdown::of(&receipt);
    let points = breakdown.total();
    debug!(id = %id, ?breakdown, "Points breakdown");
    info!(id = %id, points, "Points computed");

    Ok(Json(PointsResponse { points }))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        receipts: state.store.len().await,
    })
}

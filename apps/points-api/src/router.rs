//! Route table for the points API.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{get_points, health, process_receipt};
use crate::state::AppState;

/// Submit a receipt.
pub const PROCESS_RECEIPT_PATH: &str = "/receipts/process";

/// Points for a stored receipt.
pub const RECEIPT_POINTS_PATH: &str = "/receipt/{id}/points";

/// Liveness check.
pub const HEALTH_PATH: &str = "/health";

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(PROCESS_RECEIPT_PATH, post(process_receipt))
        .route(RECEIPT_POINTS_PATH, get(get_points))
        .route(HEALTH_PATH, get(health))
        .with_state(state)
}

//! Liveness probe.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use leadline_core::routes::HEALTH_PATH;

use crate::state::AppState;

/// Response body for `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Build the health router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(HEALTH_PATH, get(health))
}

/// `GET /api/health` — always `ok` while the process is serving.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

//! Health check endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of the `/test` liveness probe
pub const LIVENESS_MESSAGE: &str = "✅ Notes backend is running!";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "notes-ingest-server",
    })
}

/// GET /test
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/test", get(liveness))
        .route("/health", get(health_check))
}

//! Root and health endpoints.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
pub(super) struct RootResponse {
    message: &'static str,
    version: &'static str,
    status: &'static str,
}

#[derive(Serialize)]
pub(super) struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

/// `GET /` - service banner.
pub(super) async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "HabitFlow API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

/// `GET /health` - liveness probe.
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}

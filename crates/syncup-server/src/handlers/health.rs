//! Health check handler

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// GET /v1/health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

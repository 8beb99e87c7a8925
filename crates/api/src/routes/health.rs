//! Health check endpoint.

use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "byu-590r-monorepo-backend";
pub const SERVICE_VERSION: &str = "1.0.0";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// GET /api/health — returns service health status.
pub async fn check() -> Json<HealthResponse> {
    metrics::counter!("api_health_requests_total").increment(1);
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        timestamp: common::now_iso8601(),
    })
}

//! Hello world smoke-test endpoint.

use axum::Json;
use serde::Serialize;

pub const HELLO_MESSAGE: &str = "Hello World from BYU 590R Monorepo!";

#[derive(Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub timestamp: String,
}

/// GET /api/hello — returns a fixed greeting.
pub async fn hello() -> Json<HelloResponse> {
    metrics::counter!("api_hello_requests_total").increment(1);
    Json(HelloResponse {
        message: HELLO_MESSAGE,
        status: "success",
        timestamp: common::now_iso8601(),
    })
}

//! HTTP route handlers.

pub mod auth;
pub mod health;
pub mod hello;
pub mod integrations;
pub mod landing;
pub mod metrics;
pub mod user;

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Route {} not found", uri.path()))
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("Method {method} not allowed for {}", uri.path()))
}

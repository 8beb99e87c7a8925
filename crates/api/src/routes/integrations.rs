//! Third-party integration status endpoints.

use std::sync::Arc;

use accounts::UserDirectory;
use axum::Json;
use axum::extract::State;
use integrations::{PlaceholderResponse, ServiceStatus};

use crate::state::AppState;

/// GET /api/integrations/openai/status
pub async fn openai_status<D: UserDirectory + 'static>(
    State(state): State<Arc<AppState<D>>>,
) -> Json<ServiceStatus> {
    Json(state.openai.status())
}

/// GET /api/integrations/openai/placeholder
pub async fn openai_placeholder<D: UserDirectory + 'static>(
    State(state): State<Arc<AppState<D>>>,
) -> Json<PlaceholderResponse> {
    Json(state.openai.placeholder())
}

//! Login and logout endpoints.

use std::sync::Arc;

use accounts::{AccessToken, UserDirectory};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::UserId;
use serde::Serialize;

use crate::error::ApiError;
use crate::extract::{CurrentUser, LoginRequest};
use crate::state::AppState;

#[derive(Serialize)]
pub struct LoginResults {
    pub token: AccessToken,
    pub id: UserId,
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub results: LoginResults,
    pub message: &'static str,
}

/// POST /api/login — exchange credentials for a bearer token.
#[tracing::instrument(skip(state, req))]
pub async fn login<D: UserDirectory + 'static>(
    State(state): State<Arc<AppState<D>>>,
    req: LoginRequest,
) -> Result<Json<LoginResponse>, ApiError> {
    let outcome = state.auth.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        success: true,
        results: LoginResults {
            token: outcome.token,
            id: outcome.user.id,
            name: outcome.user.name,
            email: outcome.user.email,
        },
        message: "User login successfully.",
    }))
}

/// POST /api/logout — revoke the caller's bearer token.
#[tracing::instrument(skip_all)]
pub async fn logout<D: UserDirectory + 'static>(
    State(state): State<Arc<AppState<D>>>,
    current: CurrentUser,
) -> Result<StatusCode, ApiError> {
    state.auth.logout(&current.token).await?;
    tracing::info!(user_id = %current.user.id, "logged out");
    Ok(StatusCode::NO_CONTENT)
}

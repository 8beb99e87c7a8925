//! Current-user endpoint.

use accounts::UserProfile;
use axum::Json;

use crate::extract::CurrentUser;

/// GET /api/user — returns the authenticated user.
pub async fn current(current: CurrentUser) -> Json<UserProfile> {
    Json(current.user.profile())
}

//! Request extractors for login bodies and bearer authentication.

use std::sync::Arc;

use accounts::{User, UserDirectory};
use axum::Form;
use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Multipart, Request};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Email/password pair posted to the login endpoint.
///
/// Accepted as JSON, `multipart/form-data` or url-encoded form. Both
/// fields must be non-blank.
#[derive(Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.email.trim().is_empty() {
            return Err(ApiError::Validation("The email field is required.".into()));
        }
        if self.password.is_empty() {
            return Err(ApiError::Validation("The password field is required.".into()));
        }
        Ok(())
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut login = LoginRequest::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("email") => login.email = field.text().await?,
                Some("password") => login.password = field.text().await?,
                _ => {}
            }
        }
        Ok(login)
    }
}

impl<S> FromRequest<S> for LoginRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let login = if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state).await?;
            Self::from_multipart(multipart).await?
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(login) = Form::<LoginRequest>::from_request(req, state).await?;
            login
        } else {
            let Json(login) = Json::<LoginRequest>::from_request(req, state).await?;
            login
        };

        login.validate()?;
        Ok(login)
    }
}

/// Raw token from an `Authorization: Bearer <token>` header.
pub struct BearerToken(pub String);

impl BearerToken {
    fn parse(header: &str) -> Option<Self> {
        let (scheme, token) = header.trim().split_once(' ')?;
        let token = token.trim();
        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return None;
        }
        Some(Self(token.to_string()))
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(BearerToken::parse)
            .ok_or(ApiError::Unauthenticated)
    }
}

/// The user owning the request's bearer token.
pub struct CurrentUser {
    pub user: User,
    pub token: String,
}

impl<D: UserDirectory + 'static> FromRequestParts<Arc<AppState<D>>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState<D>>,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;
        let user = state.auth.authenticate(&token).await?;
        Ok(Self { user, token })
    }
}

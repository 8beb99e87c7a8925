//! API error types with HTTP response mapping.

use accounts::AuthError;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API-level error type that maps to HTTP responses.
///
/// Every variant renders as `{"success": false, "message": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Path exists but does not accept this method.
    MethodNotAllowed(String),
    /// Request body could not be extracted.
    Rejected { status: StatusCode, message: String },
    /// Input was well-formed but failed validation.
    Validation(String),
    /// Missing or malformed bearer credentials.
    Unauthenticated,
    /// Authentication error.
    Auth(AuthError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::MethodNotAllowed(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg),
            ApiError::Rejected { status, message } => (status, message),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Unauthenticated => (StatusCode::UNAUTHORIZED, UNAUTHENTICATED.to_string()),
            ApiError::Auth(err) => auth_error_to_response(err),
        };

        let body = serde_json::json!({ "success": false, "message": message });
        (status, axum::Json(body)).into_response()
    }
}

const UNAUTHENTICATED: &str = "Unauthenticated.";

fn auth_error_to_response(err: AuthError) -> (StatusCode, String) {
    match &err {
        AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Unauthorised.".to_string()),
        AuthError::InvalidToken | AuthError::UserNotFound(_) => {
            (StatusCode::UNAUTHORIZED, UNAUTHENTICATED.to_string())
        }
        AuthError::EmailTaken(_) => (StatusCode::CONFLICT, err.to_string()),
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Rejected {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_map_to_unauthorized() {
        let response = ApiError::from(AuthError::InvalidCredentials).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn validation_maps_to_unprocessable() {
        let response = ApiError::Validation("The email field is required.".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn method_not_allowed_maps_to_405() {
        let response = ApiError::MethodNotAllowed("GET /api/login".into()).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn error_bodies_are_json() {
        let response = ApiError::NotFound("nope".into()).into_response();
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }
}

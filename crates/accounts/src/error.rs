//! Authentication error types.

use common::UserId;
use thiserror::Error;

/// Errors that can occur during account and authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password pair did not match a user.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token is unknown or has been revoked.
    #[error("Invalid or revoked access token")]
    InvalidToken,

    /// A user with this email already exists.
    #[error("Email already registered: {0}")]
    EmailTaken(String),

    /// A token resolved to a user that no longer exists.
    #[error("User not found: {0}")]
    UserNotFound(UserId),
}

/// Convenience type alias for account results.
pub type Result<T> = std::result::Result<T, AuthError>;

//! Login, token resolution and logout.

use crate::directory::UserDirectory;
use crate::error::{AuthError, Result};
use crate::token::{AccessToken, TokenStore};
use crate::user::User;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: AccessToken,
    pub user: User,
}

/// Service for authenticating users against a directory.
pub struct AuthService<D: UserDirectory> {
    directory: D,
    tokens: TokenStore,
}

impl<D: UserDirectory> AuthService<D> {
    /// Creates a new auth service over the given directory.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            tokens: TokenStore::new(),
        }
    }

    /// Returns a reference to the token store.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// Unknown emails and wrong passwords both yield
    /// [`AuthError::InvalidCredentials`].
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let user = match self.directory.find_by_email(email).await? {
            Some(user) if user.password.verify(password) => user,
            _ => {
                metrics::counter!("auth_login_attempts_total", "outcome" => "failure")
                    .increment(1);
                tracing::info!("login rejected");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = self.tokens.issue(user.id).await;
        metrics::counter!("auth_login_attempts_total", "outcome" => "success").increment(1);
        tracing::info!(user_id = %user.id, "login succeeded");

        Ok(LoginOutcome { token, user })
    }

    /// Resolves a bearer token to its user.
    #[tracing::instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> Result<User> {
        let user_id = self
            .tokens
            .resolve(token)
            .await
            .ok_or(AuthError::InvalidToken)?;

        self.directory
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound(user_id))
    }

    /// Revokes a bearer token.
    #[tracing::instrument(skip_all)]
    pub async fn logout(&self, token: &str) -> Result<()> {
        if self.tokens.revoke(token).await {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

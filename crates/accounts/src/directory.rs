//! User directory trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::UserId;
use tokio::sync::RwLock;

use crate::error::{AuthError, Result};
use crate::user::{NewUser, User, normalize_email};

/// Storage for user accounts.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Looks up a user by email. The email is normalized before lookup.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Looks up a user by ID.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Stores a new user and returns the stored record.
    ///
    /// Fails with [`AuthError::EmailTaken`] if the normalized email exists.
    async fn insert(&self, new_user: NewUser) -> Result<User>;

    /// Returns the number of stored users.
    async fn count(&self) -> Result<usize>;
}

#[derive(Default)]
struct DirectoryState {
    users: HashMap<UserId, User>,
    by_email: HashMap<String, UserId>,
}

/// In-memory user directory.
#[derive(Clone, Default)]
pub struct InMemoryUserDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

impl InMemoryUserDirectory {
    /// Creates a new empty directory.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let key = normalize_email(email);
        let state = self.state.read().await;
        Ok(state
            .by_email
            .get(&key)
            .and_then(|id| state.users.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        let email = normalize_email(&new_user.email);
        let mut state = self.state.write().await;

        if state.by_email.contains_key(&email) {
            return Err(AuthError::EmailTaken(email));
        }

        let user = User {
            id: UserId::new(),
            name: new_user.name,
            email: email.clone(),
            password: new_user.password,
            created_at: Utc::now(),
        };
        state.by_email.insert(email, user.id);
        state.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.state.read().await.users.len())
    }
}

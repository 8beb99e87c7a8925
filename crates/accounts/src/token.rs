//! Opaque bearer tokens.

use std::collections::HashMap;
use std::sync::Arc;

use common::UserId;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

/// An opaque bearer token handed to clients after login.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// In-memory map from issued tokens to their owners.
#[derive(Clone, Default)]
pub struct TokenStore {
    tokens: Arc<RwLock<HashMap<String, UserId>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh token for `user_id`.
    pub async fn issue(&self, user_id: UserId) -> AccessToken {
        let token = AccessToken::generate();
        self.tokens.write().await.insert(token.0.clone(), user_id);
        token
    }

    /// Returns the owner of `token`, if it is live.
    pub async fn resolve(&self, token: &str) -> Option<UserId> {
        self.tokens.read().await.get(token).copied()
    }

    /// Revokes `token`. Returns whether it was live.
    pub async fn revoke(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token).is_some()
    }

    /// Number of live tokens.
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

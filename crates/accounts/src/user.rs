//! User records and their public projection.

use chrono::{DateTime, Utc};
use common::UserId;
use serde::Serialize;

/// A user's password.
///
/// Never serialized and redacted in `Debug` output. Comparison runs over
/// the full length of both values regardless of where they first differ.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns true if `candidate` equals this password.
    pub fn verify(&self, candidate: &str) -> bool {
        let stored = self.0.as_bytes();
        let given = candidate.as_bytes();
        let mut diff = stored.len() ^ given.len();
        for i in 0..stored.len().max(given.len()) {
            let a = stored.get(i).copied().unwrap_or(0);
            let b = given.get(i).copied().unwrap_or(0);
            diff |= usize::from(a ^ b);
        }
        diff == 0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Lower-cases and trims an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Input for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: Password,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: Password::new(password),
        }
    }
}

/// A stored user account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: Password,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Returns the public view of this user.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

/// Public, serializable view of a user. Contains no credentials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_verify_matches_exact_value_only() {
        let pw = Password::new("password");
        assert!(pw.verify("password"));
        assert!(!pw.verify("Password"));
        assert!(!pw.verify("password "));
        assert!(!pw.verify("passwor"));
        assert!(!pw.verify(""));
    }

    #[test]
    fn password_debug_is_redacted() {
        let pw = Password::new("hunter2");
        assert!(!format!("{pw:?}").contains("hunter2"));
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Test@Example.COM "), "test@example.com");
    }

    #[test]
    fn profile_omits_password() {
        let user = User {
            id: UserId::new(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: Password::new("password"),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(user.profile()).unwrap();
        assert_eq!(json["name"], "Test User");
        assert!(json.get("password").is_none());
    }
}

//! Fixture user inserted at startup so the login flow can be exercised.

use crate::directory::UserDirectory;
use crate::error::Result;
use crate::user::{NewUser, User};

/// Credentials for the seeded user.
#[derive(Clone)]
pub struct SeedUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Default for SeedUser {
    fn default() -> Self {
        Self {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "password".to_string(),
        }
    }
}

impl std::fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Inserts `seed` unless a user with its email already exists.
pub async fn seed_user<D: UserDirectory>(directory: &D, seed: &SeedUser) -> Result<User> {
    if let Some(existing) = directory.find_by_email(&seed.email).await? {
        tracing::debug!(email = %existing.email, "seed user already present");
        return Ok(existing);
    }

    let user = directory
        .insert(NewUser::new(
            seed.name.as_str(),
            seed.email.as_str(),
            seed.password.as_str(),
        ))
        .await?;
    tracing::info!(email = %user.email, "seeded test user");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::InMemoryUserDirectory;

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let directory = InMemoryUserDirectory::new();
        let seed = SeedUser::default();

        let first = seed_user(&directory, &seed).await.unwrap();
        let second = seed_user(&directory, &seed).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.name, "Test User");
        assert_eq!(directory.count().await.unwrap(), 1);
    }

    #[test]
    fn debug_hides_password() {
        let seed = SeedUser::default();
        assert!(!format!("{seed:?}").contains("password: "));
    }
}

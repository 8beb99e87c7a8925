//! Authentication collaborator for the monorepo backend.
//!
//! This crate provides:
//! - `User` / `NewUser` records with a redacted `Password`
//! - the `UserDirectory` trait and an in-memory implementation
//! - an opaque bearer `TokenStore`
//! - `AuthService` tying login, token resolution and logout together
//! - seeding of the fixture user used by end-to-end tests

pub mod directory;
pub mod error;
pub mod seed;
pub mod service;
pub mod token;
pub mod user;

pub use directory::{InMemoryUserDirectory, UserDirectory};
pub use error::{AuthError, Result};
pub use seed::{SeedUser, seed_user};
pub use service::{AuthService, LoginOutcome};
pub use token::{AccessToken, TokenStore};
pub use user::{NewUser, Password, User, UserProfile, normalize_email};

//! Shared types and process helpers used across the backend crates.

pub mod shutdown;
pub mod timestamp;
pub mod types;

pub use shutdown::shutdown_signal;
pub use timestamp::{format_iso8601, now_iso8601};
pub use types::UserId;

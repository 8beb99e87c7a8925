//! Third-party API integrations.
//!
//! Only configuration reporting exists today: no client performs network
//! calls. Services are built from configuration loaded once at startup.

pub mod openai;

pub use openai::{
    OPENAI_API_KEY_VAR, OPENAI_BASE_URL_VAR, OpenAiConfig, OpenAiService, PlaceholderResponse,
    ServiceStatus,
};

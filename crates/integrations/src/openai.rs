//! OpenAI integration placeholder.

use serde::Serialize;

/// Environment variable holding the API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable overriding the base URL.
pub const OPENAI_BASE_URL_VAR: &str = "OPENAI_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Settings for the OpenAI integration.
#[derive(Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl OpenAiConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup(OPENAI_API_KEY_VAR),
            base_url: lookup(OPENAI_BASE_URL_VAR)
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Creates a configuration with the given key and the default base URL.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// True if a non-empty key is present. Whitespace counts as content.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &self.has_api_key().then_some("<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Configuration summary reported by [`OpenAiService::status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub service: &'static str,
    pub configured: bool,
    pub base_url: String,
    pub has_api_key: bool,
}

/// Payload returned by [`OpenAiService::placeholder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub api_key_configured: bool,
}

/// Placeholder client for the OpenAI API. Never touches the network.
#[derive(Debug, Clone)]
pub struct OpenAiService {
    config: OpenAiConfig,
}

impl OpenAiService {
    pub fn new(config: OpenAiConfig) -> Self {
        Self { config }
    }

    /// Returns whether an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }

    pub fn status(&self) -> ServiceStatus {
        ServiceStatus {
            service: "OpenAI",
            configured: self.is_configured(),
            base_url: self.config.base_url.clone(),
            has_api_key: self.config.has_api_key(),
        }
    }

    pub fn placeholder(&self) -> PlaceholderResponse {
        PlaceholderResponse {
            message: "OpenAI service placeholder - implement your OpenAI integration here",
            status: "placeholder",
            api_key_configured: self.is_configured(),
        }
    }
}

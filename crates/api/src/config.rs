//! Application configuration loaded from environment variables.

use accounts::SeedUser;
use integrations::OpenAiConfig;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `4444`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `text` or `json` (default: `text`)
/// - `CORS_ALLOWED_ORIGIN`: single allowed origin (default: any)
/// - `SEED_USER_NAME`, `SEED_USER_EMAIL`, `SEED_USER_PASSWORD`: fixture user
/// - `OPENAI_API_KEY`, `OPENAI_BASE_URL`: integration stub settings
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub cors_allowed_origin: Option<String>,
    pub seed_user: SeedUser,
    pub openai: OpenAiConfig,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let seed_defaults = defaults.seed_user;

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT")
                .map(|f| LogFormat::parse(&f))
                .unwrap_or_default(),
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|o| !o.is_empty()),
            seed_user: SeedUser {
                name: lookup("SEED_USER_NAME").unwrap_or(seed_defaults.name),
                email: lookup("SEED_USER_EMAIL").unwrap_or(seed_defaults.email),
                password: lookup("SEED_USER_PASSWORD").unwrap_or(seed_defaults.password),
            },
            openai: OpenAiConfig::from_lookup(&lookup),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4444,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            cors_allowed_origin: None,
            seed_user: SeedUser::default(),
            openai: OpenAiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4444);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.cors_allowed_origin.is_none());
        assert_eq!(config.seed_user.name, "Test User");
        assert!(!config.openai.has_api_key());
    }

    #[test]
    fn test_empty_environment_matches_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.addr(), Config::default().addr());
        assert_eq!(config.seed_user.email, "test@example.com");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8000"),
            ("RUST_LOG", "debug"),
            ("LOG_FORMAT", "JSON"),
            ("CORS_ALLOWED_ORIGIN", "http://localhost"),
            ("SEED_USER_EMAIL", "demo@byu.edu"),
            ("OPENAI_API_KEY", "sk-test"),
        ]);
        assert_eq!(config.addr(), "127.0.0.1:8000");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.cors_allowed_origin.as_deref(), Some("http://localhost"));
        assert_eq!(config.seed_user.email, "demo@byu.edu");
        assert!(config.openai.has_api_key());
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, 4444);
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }
}

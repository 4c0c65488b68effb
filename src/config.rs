use crate::constants;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Immutable configuration for the Korastats upstream.
///
/// Loaded once at process start and passed by reference into the request
/// layer; nothing mutates it afterwards. The secret key is intentionally
/// absent from the `Debug` output so it can never leak through a log line.
#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the Korastats API endpoint. Should include https:// prefix.
    pub base_url: String,
    /// Shared secret appended to every call. May be empty, in which case
    /// every tool invocation resolves to a configuration error instead of
    /// a network call.
    pub api_key: String,
    /// HTTP timeout in seconds for API requests. Defaults to 15 seconds.
    #[serde(default = "default_http_timeout")]
    pub timeout_seconds: u64,
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: constants::DEFAULT_API_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_seconds: default_http_timeout(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// # Environment Variables
    /// - `KORASTATS_API_BASE_URL` - Override upstream endpoint
    /// - `KORASTATS_API_KEY` - Shared secret sent with every call
    /// - `KORASTATS_TIMEOUT_SECONDS` - HTTP timeout in seconds (default: 15)
    ///
    /// A missing key is not a load failure: it is surfaced per tool call so
    /// the server still starts and answers with a configuration error string.
    /// An unparsable timeout is logged and replaced with the default.
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = std::env::var("KORASTATS_API_BASE_URL")
            .unwrap_or_else(|_| constants::DEFAULT_API_BASE_URL.to_string());

        let api_key = std::env::var("KORASTATS_API_KEY").unwrap_or_default();

        let timeout_seconds = match std::env::var("KORASTATS_TIMEOUT_SECONDS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(value) if value > 0 => value,
                _ => {
                    warn!(
                        "Invalid KORASTATS_TIMEOUT_SECONDS={raw}, falling back to {} seconds",
                        default_http_timeout()
                    );
                    default_http_timeout()
                }
            },
            Err(_) => default_http_timeout(),
        };

        let config = Config {
            base_url,
            api_key,
            timeout_seconds,
        };

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings.
    ///
    /// # Validation Rules
    /// - Base URL cannot be empty
    /// - Base URL must look like an HTTP(S) URL
    pub fn validate(&self) -> Result<(), AppError> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::config_error("API base URL cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AppError::config_error(
                "API base URL must start with http:// or https://",
            ));
        }

        Ok(())
    }

    /// The secret with surrounding whitespace stripped; empty means unset.
    pub fn trimmed_api_key(&self) -> &str {
        self.api_key.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // Safety: tests in this module are serialized
        unsafe {
            std::env::remove_var("KORASTATS_API_BASE_URL");
            std::env::remove_var("KORASTATS_API_KEY");
            std::env::remove_var("KORASTATS_TIMEOUT_SECONDS");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, constants::DEFAULT_API_BASE_URL);
        assert_eq!(config.api_key, "");
        assert_eq!(config.timeout_seconds, 15);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        unsafe {
            std::env::set_var("KORASTATS_API_BASE_URL", "https://stats.example/api.php");
            std::env::set_var("KORASTATS_API_KEY", "sekrit");
            std::env::set_var("KORASTATS_TIMEOUT_SECONDS", "30");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, "https://stats.example/api.php");
        assert_eq!(config.api_key, "sekrit");
        assert_eq!(config.timeout_seconds, 30);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout_falls_back() {
        clear_env();
        unsafe {
            std::env::set_var("KORASTATS_TIMEOUT_SECONDS", "not-a-number");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.timeout_seconds, 15);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_zero_timeout_falls_back() {
        clear_env();
        unsafe {
            std::env::set_var("KORASTATS_TIMEOUT_SECONDS", "0");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.timeout_seconds, 15);
        clear_env();
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let config = Config {
            base_url: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_schemeless_base_url() {
        let config = Config {
            base_url: "korastats.pro/pro/api.php".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_trimmed_api_key() {
        let config = Config {
            api_key: "  key  ".to_string(),
            ..Config::default()
        };
        assert_eq!(config.trimmed_api_key(), "key");

        let blank = Config {
            api_key: "   ".to_string(),
            ..Config::default()
        };
        assert!(blank.trimmed_api_key().is_empty());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config {
            api_key: "super-secret".to_string(),
            ..Config::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}

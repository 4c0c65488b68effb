//! Authenticated request execution against the Korastats endpoint.

use crate::config::Config;
use crate::constants::{self, wire};
use crate::error::AppError;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Executes authenticated GET requests and classifies failures.
///
/// The underlying `reqwest` client is built once with the configured
/// timeout and a bounded idle pool; each call's response is a scoped
/// resource dropped on every exit path, including timeout. The secret key
/// is injected here and nowhere else, and is excluded from every log line.
#[derive(Debug, Clone)]
pub struct KorastatsClient {
    client: Client,
    config: Arc<Config>,
}

impl KorastatsClient {
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .pool_max_idle_per_host(constants::HTTP_POOL_MAX_IDLE_PER_HOST)
            .build()?;

        Ok(Self { client, config })
    }

    /// Issue a single GET for `api_name` with the five fixed fields, the
    /// key, and the caller-supplied params. No retry; a timeout surfaces
    /// as a network error.
    ///
    /// Fails with [`AppError::MissingApiKey`] before any network call when
    /// the configured key is empty or whitespace-only.
    #[instrument(skip(self, params))]
    pub async fn execute(
        &self,
        api_name: &str,
        params: &[(&str, String)],
    ) -> Result<Value, AppError> {
        let api_key = self.config.trimmed_api_key();
        if api_key.is_empty() {
            return Err(AppError::MissingApiKey);
        }

        let mut query: Vec<(&str, String)> = vec![
            ("module", wire::MODULE.to_string()),
            ("api", api_name.to_string()),
            ("version", wire::VERSION.to_string()),
            ("response", wire::RESPONSE.to_string()),
            ("lang", wire::LANG.to_string()),
        ];
        query.extend(params.iter().map(|(name, value)| (*name, value.clone())));

        // Log before the key is appended so it can never appear here
        info!("Calling API {api_name} with params {query:?}");
        query.push(("key", api_key.to_string()));

        let url = &self.config.base_url;
        let response = match self.client.get(url).query(&query).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Korastats request failed for {api_name}: {e}");
                return Err(if e.is_timeout() {
                    AppError::network_timeout(url)
                } else if e.is_connect() {
                    AppError::network_connection(url, e.to_string())
                } else {
                    AppError::ApiFetch(e)
                });
            }
        };

        let status = response.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            error!("Korastats API returned {} for {api_name}", status.as_u16());
            return Err(AppError::http_status(status.as_u16()));
        }

        let body = response.text().await.map_err(AppError::ApiFetch)?;
        debug!("Response length: {} bytes", body.len());

        serde_json::from_str::<Value>(&body).map_err(|e| {
            error!("Korastats JSON parse error for {api_name}: {e}");
            AppError::malformed_body(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_key(api_key: &str) -> KorastatsClient {
        let config = Config {
            base_url: "https://korastats.test/api.php".to_string(),
            api_key: api_key.to_string(),
            ..Config::default()
        };
        KorastatsClient::new(Arc::new(config)).unwrap()
    }

    #[tokio::test]
    async fn test_empty_key_fails_before_any_request() {
        let client = client_with_key("");
        let err = client.execute("SeasonList", &[]).await.unwrap_err();
        assert!(matches!(err, AppError::MissingApiKey));
        assert!(err.is_pre_request());
    }

    #[tokio::test]
    async fn test_whitespace_key_fails_before_any_request() {
        let client = client_with_key("   ");
        let err = client.execute("SeasonList", &[]).await.unwrap_err();
        assert!(matches!(err, AppError::MissingApiKey));
    }
}

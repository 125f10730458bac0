use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::WeatherApiError;

/// Settings for the WeatherAPI.com client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// Base URL, e.g. `http://api.weatherapi.com/v1`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://api.weatherapi.com/v1".to_string()
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url() }
    }
}

/// Client for WeatherAPI.com's current-conditions endpoint.
#[derive(Clone)]
pub struct WeatherApiClient {
    api_key: String,
    config: WeatherApiConfig,
    http: Client,
}

// The credential must not leak through Debug output or logs.
impl std::fmt::Debug for WeatherApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_config(api_key, WeatherApiConfig::default())
    }

    pub fn with_config(api_key: String, config: WeatherApiConfig) -> Self {
        Self { api_key, config, http: Client::new() }
    }

    /// Fetch current conditions for a location query.
    ///
    /// The query string is forwarded to the provider as-is; validating it is
    /// the caller's concern. Returns the provider body as parsed JSON so the
    /// proxy route can relay it unmodified.
    pub async fn current(&self, query: &str) -> Result<Value, WeatherApiError> {
        let url = format!("{}/current.json", self.config.base_url);

        debug!(%query, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherApiError::Status { status, body: truncate_body(&body) });
        }

        let parsed: Value = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

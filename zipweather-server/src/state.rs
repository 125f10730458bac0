//! Shared state for the proxy handlers.

use std::sync::Arc;

use zipweather_core::{ServerConfig, WeatherApiClient, WeatherApiConfig};

/// State injected into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Upstream client, or `None` when no provider key was configured.
    /// The weather route answers 500 in that case.
    pub weather: Option<Arc<WeatherApiClient>>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let upstream = WeatherApiConfig { base_url: config.upstream_base_url };
        let weather =
            config.api_key.map(|key| Arc::new(WeatherApiClient::with_config(key, upstream)));

        Self { weather }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_client_without_api_key() {
        let state = AppState::new(ServerConfig::default());
        assert!(state.weather.is_none());
    }

    #[test]
    fn client_present_with_api_key() {
        let config = ServerConfig { api_key: Some("KEY".to_string()), ..ServerConfig::default() };
        let state = AppState::new(config);
        assert!(state.weather.is_some());
    }
}

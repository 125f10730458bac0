//! Upstream weather provider access.
//!
//! The proxy route relays the provider's body verbatim, so the client here
//! returns parsed JSON as an untyped value instead of a domain struct.

use thiserror::Error;

pub mod weatherapi;

pub use weatherapi::{WeatherApiClient, WeatherApiConfig};

/// Failures talking to the upstream provider.
#[derive(Debug, Error)]
pub enum WeatherApiError {
    /// The request could not be sent or its body could not be read.
    #[error("Failed to reach the weather provider: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Weather provider request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The provider body was not valid JSON.
    #[error("Failed to parse weather provider JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

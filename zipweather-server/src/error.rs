//! Error mapping for the proxy route.
//!
//! The route's contract fixes exact plain-text bodies per failure class, so
//! errors render as `(status, text)` rather than a JSON envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures answering `/api/weather`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// The `zipCode` query parameter was missing or empty.
    #[error("Zip code not set")]
    ZipCodeNotSet,

    /// No provider key is configured on the server.
    #[error("Weather API key not set")]
    ApiKeyNotSet,

    /// The upstream call failed: transport error, error status, or an
    /// unparseable body.
    #[error("Weather API request failed")]
    UpstreamFailed,
}

impl ApiError {
    const fn status(self) -> StatusCode {
        match self {
            Self::ZipCodeNotSet => StatusCode::BAD_REQUEST,
            Self::ApiKeyNotSet | Self::UpstreamFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

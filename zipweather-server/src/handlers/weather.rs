//! The weather proxy route.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Query parameters for [`get_weather`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherParams {
    /// Raw zip code string, forwarded to the provider as-is.
    pub zip_code: Option<String>,
}

/// GET /api/weather?zipCode=…
///
/// Single-attempt passthrough: the provider's JSON body is relayed
/// unmodified on success; every failure class maps to a fixed plain-text
/// status (see [`ApiError`]).
#[instrument(skip(state, params))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<Value>, ApiError> {
    let zip_code =
        params.zip_code.filter(|z| !z.is_empty()).ok_or(ApiError::ZipCodeNotSet)?;

    let weather = state.weather.as_ref().ok_or(ApiError::ApiKeyNotSet)?;

    info!(%zip_code, "proxying weather lookup");

    let body = weather.current(&zip_code).await.map_err(|err| {
        warn!(%err, "upstream weather request failed");
        ApiError::UpstreamFailed
    })?;

    Ok(Json(body))
}

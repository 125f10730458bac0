//! The weather page view-model.
//!
//! Holds the display state shared by the hosted page and the terminal
//! front: the entered zip code, the last successful report, the loading
//! flag and the unit toggle. All transitions go through [`WeatherPage`]
//! methods; failures are logged and never shown to the user beyond the
//! weather panel clearing.

use reqwest::Client;
use thiserror::Error;
use tracing::{error, warn};

use crate::model::{self, Unit, WeatherReport, ZipCode};

/// Failures fetching through the proxy route.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or its body could not be read.
    #[error("Failed to reach the weather endpoint: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Weather endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    /// The body did not match the expected report shape.
    #[error("Failed to parse weather response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the server's `/api/weather` route.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    base_url: String,
    http: Client,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/weather?zipCode=…`, parsed into the typed report.
    pub async fn get_weather(&self, zip_code: &ZipCode) -> Result<WeatherReport, FetchError> {
        let url = format!("{}/api/weather", self.base_url.trim_end_matches('/'));

        let res = self.http.get(&url).query(&[("zipCode", zip_code.as_str())]).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = res.text().await?;
        let report: WeatherReport = serde_json::from_str(&body)?;
        Ok(report)
    }
}

/// Token identifying one "Get Weather" action.
///
/// A completing fetch applies its outcome only while its ticket is still the
/// newest one issued (latest request wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// State machine behind the weather page.
#[derive(Debug)]
pub struct WeatherPage {
    proxy: ProxyClient,
    zip_code: String,
    weather: Option<WeatherReport>,
    loading: bool,
    unit: Unit,
    fetch_seq: u64,
}

impl WeatherPage {
    pub fn new(proxy: ProxyClient) -> Self {
        Self {
            proxy,
            zip_code: String::new(),
            weather: None,
            loading: false,
            unit: Unit::default(),
            fetch_seq: 0,
        }
    }

    pub fn set_zip_code(&mut self, input: impl Into<String>) {
        self.zip_code = input.into();
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn weather(&self) -> Option<&WeatherReport> {
        self.weather.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// Flip the Celsius/Fahrenheit display flag. Purely local.
    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggled();
    }

    /// The temperature line for the current unit toggle.
    ///
    /// Fahrenheit is always derived from the Celsius reading; a missing
    /// reading shows as 0 °F, and as "? °C" on the Celsius side.
    pub fn temperature_display(&self) -> Option<String> {
        let current = &self.weather.as_ref()?.current;

        let text = match self.unit {
            Unit::Celsius => match current.temp_c {
                Some(c) => format!("{c} °C"),
                None => "? °C".to_string(),
            },
            Unit::Fahrenheit => {
                format!("{} °F", model::fahrenheit_for_display(current.temp_c))
            }
        };

        Some(text)
    }

    /// Begin the "Get Weather" action: enter loading, then validate.
    ///
    /// Returns `None` when validation fails; the page is back to idle and no
    /// request may be issued for this action. A valid input yields a ticket
    /// plus the zip code to fetch with.
    pub fn begin_fetch(&mut self) -> Option<(FetchTicket, ZipCode)> {
        self.loading = true;

        match ZipCode::parse(&self.zip_code) {
            Ok(zip_code) => {
                self.fetch_seq += 1;
                Some((FetchTicket(self.fetch_seq), zip_code))
            }
            Err(err) => {
                warn!(input = %self.zip_code, %err, "rejected zip code input");
                self.loading = false;
                None
            }
        }
    }

    /// Apply a finished fetch. Outcomes of superseded fetches are dropped.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<WeatherReport, FetchError>,
    ) {
        if ticket.0 != self.fetch_seq {
            warn!(ticket = ticket.0, newest = self.fetch_seq, "dropping superseded fetch result");
            return;
        }

        match outcome {
            Ok(report) => self.weather = Some(report),
            Err(err) => {
                error!(%err, "weather fetch failed");
                self.weather = None;
            }
        }

        self.loading = false;
    }

    /// The full "Get Weather" action: validate, call the proxy, apply.
    pub async fn get_weather(&mut self) {
        let Some((ticket, zip_code)) = self.begin_fetch() else {
            return;
        };

        let proxy = self.proxy.clone();
        let outcome = proxy.get_weather(&zip_code).await;
        self.complete_fetch(ticket, outcome);
    }
}

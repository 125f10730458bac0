use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection reasons for user-entered zip codes.
///
/// The checks run in a fixed order (empty, length, numeric) so the first
/// failing one is reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ZipCodeError {
    #[error("Zip code not set")]
    Empty,

    #[error("Zip code must be 5 digits")]
    Length,

    #[error("Zip code must be a number")]
    NotNumeric,
}

/// A validated 5-digit US postal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Validate raw user input.
    pub fn parse(input: &str) -> Result<Self, ZipCodeError> {
        if input.is_empty() {
            return Err(ZipCodeError::Empty);
        }

        if input.chars().count() != 5 {
            return Err(ZipCodeError::Length);
        }

        if !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(ZipCodeError::NotNumeric);
        }

        Ok(Self(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ZipCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ZipCode {
    type Err = ZipCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Temperature unit for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn toggled(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
        })
    }
}

/// Fahrenheit value shown when the user toggles away from Celsius.
///
/// A missing reading displays as 0 °F rather than being converted.
pub fn fahrenheit_for_display(celsius: Option<f64>) -> i32 {
    match celsius {
        Some(c) => (c * 9.0 / 5.0 + 32.0).round() as i32,
        None => 0,
    }
}

/// The typed client-side view of the provider payload.
///
/// The proxy route relays this body verbatim; only the clients parse it.
/// Fields the provider may omit (the temperature pair, `condition`) are
/// optional, the rest are taken as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub tz_id: String,
    pub localtime_epoch: i64,
    pub localtime: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Current {
    pub last_updated_epoch: i64,
    pub last_updated: String,
    pub temp_c: Option<f64>,
    pub temp_f: Option<f64>,
    pub is_day: u8,
    pub condition: Option<Condition>,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_degree: i32,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub pressure_in: f64,
    pub precip_mm: f64,
    pub precip_in: f64,
    pub humidity: u8,
    pub cloud: u8,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub vis_km: f64,
    pub vis_miles: f64,
    pub uv: f64,
    pub gust_mph: f64,
    pub gust_kph: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
    pub code: i32,
}

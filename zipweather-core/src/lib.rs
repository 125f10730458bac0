//! Core library for the zip-code weather app.
//!
//! This crate defines:
//! - Zip-code validation and the weather data model
//! - The upstream provider client used by the proxy route
//! - The page view-model (input validation, fetch, display state)
//! - Configuration for the server binary and the terminal front
//!
//! It is used by `zipweather-server` and `zipweather-cli`, but can also be
//! reused by other binaries or services.

pub mod config;
pub mod model;
pub mod page;
pub mod provider;

pub use config::{CliConfig, ServerConfig};
pub use model::{Unit, WeatherReport, ZipCode, ZipCodeError};
pub use page::{FetchError, FetchTicket, ProxyClient, WeatherPage};
pub use provider::{WeatherApiClient, WeatherApiConfig, WeatherApiError};

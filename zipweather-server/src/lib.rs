//! HTTP service for the zip-code weather app.
//!
//! Hosts the browser page and the `/api/weather` proxy route that keeps the
//! provider credential server-side.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

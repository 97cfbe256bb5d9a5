//! Open-Meteo Weather Source
//!
//! Fetches the current-weather snapshot for one fixed coordinate.
//!
//! ## Layout
//!
//! - **Client**: [`WeatherSource`] trait and the reqwest-backed [`OpenMeteoClient`]
//! - **Snapshot**: the opaque JSON payload and render-time field extraction

mod client;
mod snapshot;

pub use client::{
    forecast_url, FetchError, OpenMeteoClient, WeatherConfig, WeatherSource, DEFAULT_BASE_URL,
    FORECAST_QUERY, LATITUDE, LONGITUDE,
};
pub use snapshot::{CurrentConditions, SnapshotError, WeatherSnapshot};

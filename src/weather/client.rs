//! Open-Meteo HTTP Client
//!
//! One GET against the forecast endpoint for the fixed coordinate, in
//! Fahrenheit and miles per hour. No retry, no timeout.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use super::snapshot::WeatherSnapshot;

/// Default Open-Meteo API base
pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";

/// Latitude of the fixed location
pub const LATITUDE: &str = "40.769883744600065";

/// Longitude of the fixed location
pub const LONGITUDE: &str = "-73.98379341590314";

/// Query string sent with every forecast request
pub const FORECAST_QUERY: &str = "latitude=40.769883744600065&longitude=-73.98379341590314&current_weather=true&temperature_unit=fahrenheit&wind_speed_unit=mph";

/// Build the forecast URL under `base_url`
pub fn forecast_url(base_url: &str) -> String {
    format!(
        "{}/forecast?{}",
        base_url.trim_end_matches('/'),
        FORECAST_QUERY
    )
}

/// Weather fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// Could not reach the weather service
    #[error("Weather service unavailable: {0}")]
    Unavailable(String),

    /// The request failed after connecting
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx status while strict status checking is enabled
    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    /// The body was not valid JSON
    #[error("Invalid JSON body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Weather source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// API base URL; the path and query are fixed
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Treat non-2xx responses as fetch failures
    #[serde(default)]
    pub require_success_status: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            require_success_status: false,
        }
    }
}

impl WeatherConfig {
    /// Config pointing at a different base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Something that can produce the current weather snapshot
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Issue one request for the current weather
    async fn fetch_current(&self) -> Result<WeatherSnapshot, FetchError>;
}

/// Open-Meteo forecast client
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    pub fn new(config: WeatherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(WeatherConfig::default())
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Full request URL
    pub fn url(&self) -> String {
        forecast_url(&self.config.base_url)
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn fetch_current(&self) -> Result<WeatherSnapshot, FetchError> {
        let url = self.url();
        debug!(%url, "Requesting current weather");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_connect() {
                FetchError::Unavailable(e.to_string())
            } else {
                FetchError::Request(e)
            }
        })?;

        let status = response.status();
        if self.config.require_success_status && !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;

        debug!(%status, "Current weather received");
        Ok(WeatherSnapshot::new(value))
    }
}

//! Weather Snapshot
//!
//! The API payload is kept as-is. Fields are only read when a view renders.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw JSON payload returned by the forecast endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherSnapshot(serde_json::Value);

/// The two fields the weather view displays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentConditions {
    /// Degrees Fahrenheit
    pub temperature: f64,
    /// Miles per hour
    pub windspeed: f64,
}

/// The payload does not have the shape the weather view reads
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("response has no current_weather object")]
    MissingCurrentWeather,

    #[error("current_weather.{0} is missing or not a number")]
    MissingField(&'static str),
}

impl WeatherSnapshot {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Borrow the raw payload
    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }

    /// Read `current_weather.temperature` and `current_weather.windspeed`
    pub fn current(&self) -> Result<CurrentConditions, SnapshotError> {
        let current = self
            .0
            .get("current_weather")
            .filter(|v| v.is_object())
            .ok_or(SnapshotError::MissingCurrentWeather)?;

        let field = |name: &'static str| {
            current
                .get(name)
                .and_then(serde_json::Value::as_f64)
                .ok_or(SnapshotError::MissingField(name))
        };

        Ok(CurrentConditions {
            temperature: field("temperature")?,
            windspeed: field("windspeed")?,
        })
    }
}

impl From<serde_json::Value> for WeatherSnapshot {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

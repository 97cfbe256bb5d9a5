//! Weather JSON Route
//!
//! - GET /api/v1/weather - Current conditions as JSON

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// Current conditions response
#[derive(Debug, Serialize)]
pub struct CurrentWeatherResponse {
    pub temperature: f64,
    pub temperature_unit: &'static str,
    pub windspeed: f64,
    pub windspeed_unit: &'static str,
}

/// GET /api/v1/weather
pub async fn current_weather(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CurrentWeatherResponse>> {
    let snapshot = state.views.weather.fetch_current().await?;
    let current = snapshot.current()?;

    Ok(Json(CurrentWeatherResponse {
        temperature: current.temperature,
        temperature_unit: "°F",
        windspeed: current.windspeed,
        windspeed_unit: "mph",
    }))
}

//! Open-Meteo Client
//!
//! One GET for the current weather at a fixed coordinate, in Fahrenheit and
//! miles per hour. The response status is not checked: any body that parses
//! as JSON is returned.

use gloo_net::http::Request;

/// Forecast request for the fixed location
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast?latitude=40.769883744600065&longitude=-73.98379341590314&current_weather=true&temperature_unit=fahrenheit&wind_speed_unit=mph";

/// Fetch the raw current-weather payload
pub async fn fetch_current_weather() -> Result<serde_json::Value, String> {
    let response = Request::get(FORECAST_URL)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

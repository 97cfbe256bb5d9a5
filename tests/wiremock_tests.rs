//! Integration tests for the weather view using wiremock
//!
//! These tests run the real Open-Meteo client against a mock HTTP server and
//! check the view lifecycle: loading first, one request per mount, and the
//! rendered output for success and failure responses.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use weatherdeck::router::Route;
use weatherdeck::views::{render_settled, ViewContext, WeatherState, WeatherView};
use weatherdeck::weather::{
    FetchError, OpenMeteoClient, WeatherConfig, WeatherSnapshot, WeatherSource,
};
use weatherdeck::{FixedClock, Page};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn sample_weather_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 40.768486,
        "longitude": -73.98155,
        "generationtime_ms": 0.05,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "timezone_abbreviation": "GMT",
        "elevation": 27.0,
        "current_weather_units": {
            "time": "iso8601",
            "interval": "seconds",
            "temperature": "°F",
            "windspeed": "mp/h",
            "winddirection": "°",
            "is_day": "",
            "weathercode": "wmo code"
        },
        "current_weather": {
            "time": "2024-01-15T12:00",
            "interval": 900,
            "temperature": 72,
            "windspeed": 5,
            "winddirection": 250,
            "is_day": 1,
            "weathercode": 1
        }
    })
}

/// Mock matching the exact documented request
fn forecast_mock() -> wiremock::MockBuilder {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "40.769883744600065"))
        .and(query_param("longitude", "-73.98379341590314"))
        .and(query_param("current_weather", "true"))
        .and(query_param("temperature_unit", "fahrenheit"))
        .and(query_param("wind_speed_unit", "mph"))
}

fn client_for(server: &MockServer) -> Arc<dyn WeatherSource> {
    client_with(WeatherConfig::with_base_url(format!("{}/v1", server.uri())))
}

fn client_with(config: WeatherConfig) -> Arc<dyn WeatherSource> {
    Arc::new(OpenMeteoClient::new(config).unwrap())
}

/// Base URL nothing is listening on
fn closed_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/v1", port)
}

fn assert_fetch_failed(page: &Page) {
    assert_eq!(page.text(), "Error: Failed to fetch weather data");
    assert!(!page.contains("Temperature"));
    assert!(!page.contains("Wind Speed"));
}

#[tokio::test]
async fn test_loading_before_response() {
    let server = MockServer::start().await;
    forecast_mock()
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_weather_response())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let mut view = WeatherView::mount(client_for(&server));

    assert_eq!(view.state(), WeatherState::Loading);
    assert_eq!(view.render().text(), "Loading...");

    view.settled().await;
    assert!(!view.render().contains("Loading"));
}

#[tokio::test]
async fn test_success_renders_fields() {
    let server = MockServer::start().await;
    forecast_mock()
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&server)
        .await;

    let mut view = WeatherView::mount(client_for(&server));
    view.settled().await;
    let page = view.render();

    assert_eq!(page.heading.as_deref(), Some("Current Weather"));
    assert!(page.contains("Temperature: 72°F"));
    assert!(page.contains("Wind Speed: 5 mph"));
    assert!(!page.contains("Loading"));
    assert!(!page.contains("Error"));
}

#[tokio::test]
async fn test_minimal_body() {
    let server = MockServer::start().await;
    forecast_mock()
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current_weather": {"temperature": 72, "windspeed": 5}
        })))
        .mount(&server)
        .await;

    let mut view = WeatherView::mount(client_for(&server));
    view.settled().await;

    assert_eq!(
        view.render().lines,
        vec!["Temperature: 72°F".to_string(), "Wind Speed: 5 mph".to_string()]
    );
}

#[tokio::test]
async fn test_network_failure() {
    let mut view = WeatherView::mount(client_with(WeatherConfig::with_base_url(
        closed_base_url(),
    )));

    let state = view.settled().await;
    assert!(matches!(state, WeatherState::Failed(_)));
    assert_fetch_failed(&view.render());
}

#[tokio::test]
async fn test_malformed_json() {
    let server = MockServer::start().await;
    forecast_mock()
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let mut view = WeatherView::mount(client_for(&server));
    view.settled().await;

    assert_fetch_failed(&view.render());
}

#[tokio::test]
async fn test_one_request_per_mount() {
    let server = MockServer::start().await;
    forecast_mock()
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);

    // Nothing is sent before mount
    assert_eq!(server.received_requests().await.unwrap().len(), 0);

    let mut first = WeatherView::mount(Arc::clone(&client));
    first.settled().await;
    let _ = first.render();
    let _ = first.render();
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
    first.unmount();

    let mut second = WeatherView::mount(Arc::clone(&client));
    second.settled().await;
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_request_has_no_body() {
    let server = MockServer::start().await;
    forecast_mock()
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .mount(&server)
        .await;

    let mut view = WeatherView::mount(client_for(&server));
    view.settled().await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_error_status_with_json_body_is_not_a_fetch_failure() {
    let server = MockServer::start().await;
    forecast_mock()
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": true,
            "reason": "Latitude must be in range of -90 to 90°."
        })))
        .mount(&server)
        .await;

    let mut view = WeatherView::mount(client_for(&server));
    let state = view.settled().await;

    assert!(matches!(state, WeatherState::Loaded(_)));
    assert_eq!(
        view.render().text(),
        "Error: Unexpected weather data format"
    );
}

#[tokio::test]
async fn test_error_status_with_strict_checking() {
    let server = MockServer::start().await;
    forecast_mock()
        .respond_with(ResponseTemplate::new(503).set_body_json(sample_weather_response()))
        .mount(&server)
        .await;

    let config = WeatherConfig {
        base_url: format!("{}/v1", server.uri()),
        require_success_status: true,
    };
    let mut view = WeatherView::mount(client_with(config));
    view.settled().await;

    assert_fetch_failed(&view.render());
}

/// Source that records whether the wrapped fetch ran to completion
struct TrackCompletion {
    inner: Arc<dyn WeatherSource>,
    finished: Arc<AtomicBool>,
}

#[async_trait]
impl WeatherSource for TrackCompletion {
    async fn fetch_current(&self) -> Result<WeatherSnapshot, FetchError> {
        let result = self.inner.fetch_current().await;
        self.finished.store(true, Ordering::SeqCst);
        result
    }
}

async fn wait_for_requests(server: &MockServer, count: usize) {
    for _ in 0..200 {
        if server.received_requests().await.unwrap().len() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("mock server never saw {} request(s)", count);
}

#[tokio::test]
async fn test_unmount_before_response() {
    let server = MockServer::start().await;
    forecast_mock()
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_weather_response())
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let finished = Arc::new(AtomicBool::new(false));
    let source = Arc::new(TrackCompletion {
        inner: client_for(&server),
        finished: Arc::clone(&finished),
    });

    let view = WeatherView::mount(source);
    wait_for_requests(&server, 1).await;
    assert!(view.state().is_loading());

    view.unmount();

    // Well past the response delay: the aborted fetch never resumed
    tokio::time::sleep(Duration::from_millis(800)).await;
    assert!(!finished.load(Ordering::SeqCst));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_routes_render_their_own_view() {
    let server = MockServer::start().await;
    forecast_mock()
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&server)
        .await;

    let clock = Arc::new(FixedClock::new(
        chrono::DateTime::parse_from_rfc3339("2024-01-15T12:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc),
    ));
    let ctx = ViewContext::new(client_for(&server), clock);

    let welcome = render_settled(Route::resolve("/"), &ctx).await;
    assert_eq!(welcome.heading.as_deref(), Some("Welcome"));
    assert!(!welcome.contains("Health Check"));
    assert!(!welcome.contains("Current Weather"));

    let health = render_settled(Route::resolve("/health"), &ctx).await;
    assert_eq!(health.heading.as_deref(), Some("Health Check"));
    assert!(health.contains("Timestamp: 2024-01-15T12:00:00.000Z"));
    assert!(!health.contains("Temperature"));

    let weather = render_settled(Route::resolve("/weather"), &ctx).await;
    assert_eq!(weather.heading.as_deref(), Some("Current Weather"));
    assert!(!weather.contains("Status: OK"));

    let missing = render_settled(Route::resolve("/nope"), &ctx).await;
    assert_eq!(missing.heading.as_deref(), Some("Page Not Found"));
}

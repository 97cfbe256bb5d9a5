//! Weatherdeck HTTP Server
//!
//! Serves each view as an HTML page, built with Axum.
//!
//! # Endpoints
//!
//! ## Views
//! Page paths are resolved by [`Route::resolve`](crate::router::Route::resolve):
//! - `GET /` - Welcome
//! - `GET /health` - Health status and timestamp
//! - `GET /weather` - Current weather
//! - anything else - Not Found (404)
//!
//! ## JSON
//! - `GET /api/v1/weather` - Current temperature and wind speed
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use weatherdeck::api::{serve, AppState};
//! use weatherdeck::config::ApiConfig;
//! use weatherdeck::weather::OpenMeteoClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::new(Arc::new(OpenMeteoClient::with_defaults()?), config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod layout;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let api_routes = Router::new().route("/weather", get(routes::weather::current_weather));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .fallback(routes::pages::page)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

/// Start the server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Weatherdeck listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Weatherdeck shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

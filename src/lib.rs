//! # Weatherdeck
//!
//! Three routed views: a welcome page, a health check, and the current
//! weather for a fixed location fetched from Open-Meteo.
//!
//! ## Modules
//!
//! - [`views`]: view models and their render contracts
//! - [`weather`]: Open-Meteo client and the raw snapshot
//! - [`router`]: path to view resolution
//! - [`clock`]: injectable time source
//! - [`api`]: HTML server with Axum
//! - [`config`]: TOML and environment configuration
//! - [`logging`]: tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use weatherdeck::views::WeatherView;
//! use weatherdeck::weather::OpenMeteoClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(OpenMeteoClient::with_defaults()?);
//!
//!     let mut view = WeatherView::mount(client);
//!     println!("{}", view.render()); // Loading...
//!
//!     view.settled().await;
//!     println!("{}", view.render());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod clock;
pub mod config;
pub mod logging;
pub mod router;
pub mod views;
pub mod weather;

pub use api::{build_router, serve, ApiError, AppState};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
pub use router::Route;
pub use views::{render_settled, Page, ViewContext, WeatherState, WeatherView};
pub use weather::{
    CurrentConditions, FetchError, OpenMeteoClient, SnapshotError, WeatherConfig,
    WeatherSnapshot, WeatherSource,
};

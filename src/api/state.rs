//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::ApiConfig;
use crate::views::ViewContext;
use crate::weather::WeatherSource;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Weather source and clock handed to views on mount
    pub views: ViewContext,
    /// Server configuration
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Create state backed by the system clock
    pub fn new(weather: Arc<dyn WeatherSource>, config: ApiConfig) -> Self {
        Self::with_clock(weather, Arc::new(SystemClock), config)
    }

    /// Create state with an explicit clock
    pub fn with_clock(
        weather: Arc<dyn WeatherSource>,
        clock: Arc<dyn Clock>,
        config: ApiConfig,
    ) -> Self {
        Self {
            views: ViewContext::new(weather, clock),
            config: Arc::new(config),
        }
    }
}

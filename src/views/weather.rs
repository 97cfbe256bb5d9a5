//! Weather View
//!
//! Mounting spawns exactly one fetch. Until it resolves the view renders the
//! loading indicator; afterwards it renders either the error message or the
//! two current-weather fields.
//!
//! The fetch result travels over a `watch` channel. Unmounting drops the
//! receiver and aborts the task, so a late response is never committed.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::Page;
use crate::weather::{WeatherSnapshot, WeatherSource};

pub const HEADING: &str = "Current Weather";
pub const LOADING_TEXT: &str = "Loading...";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data";
pub const UNEXPECTED_SHAPE_MESSAGE: &str = "Unexpected weather data format";

/// Lifecycle of one mounted weather view
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherState {
    Loading,
    Loaded(WeatherSnapshot),
    Failed(String),
}

impl WeatherState {
    pub fn is_loading(&self) -> bool {
        matches!(self, WeatherState::Loading)
    }

    /// Render in priority order: loading, then error, then data
    pub fn render(&self) -> Page {
        match self {
            WeatherState::Loading => Page::message(LOADING_TEXT),
            WeatherState::Failed(message) => error_page(message),
            WeatherState::Loaded(snapshot) => match snapshot.current() {
                Ok(current) => Page::new()
                    .heading(HEADING)
                    .line(format!(
                        "Temperature: {}°F",
                        format_number(current.temperature)
                    ))
                    .line(format!("Wind Speed: {} mph", format_number(current.windspeed))),
                Err(e) => {
                    tracing::warn!(error = %e, "Weather snapshot has unexpected shape");
                    error_page(UNEXPECTED_SHAPE_MESSAGE)
                }
            },
        }
    }
}

fn error_page(message: &str) -> Page {
    Page::message(format!("Error: {}", message))
}

/// Shortest decimal form: `72`, `72.5`, `-3.1`
fn format_number(value: f64) -> String {
    if value == 0.0 {
        // avoids "-0"
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// A mounted weather view
#[derive(Debug)]
pub struct WeatherView {
    state: watch::Receiver<WeatherState>,
    task: JoinHandle<()>,
}

impl WeatherView {
    /// Mount the view and start its single fetch
    pub fn mount(source: Arc<dyn WeatherSource>) -> Self {
        let (tx, rx) = watch::channel(WeatherState::Loading);

        let task = tokio::spawn(async move {
            let next = match source.fetch_current().await {
                Ok(snapshot) => WeatherState::Loaded(snapshot),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to fetch weather data");
                    WeatherState::Failed(FETCH_FAILED_MESSAGE.to_string())
                }
            };

            if tx.send(next).is_err() {
                tracing::debug!("Weather view unmounted before fetch completed, discarding result");
            }
        });

        tracing::debug!("Weather view mounted");
        Self { state: rx, task }
    }

    /// Current state
    pub fn state(&self) -> WeatherState {
        self.state.borrow().clone()
    }

    /// Render the current state
    pub fn render(&self) -> Page {
        self.state.borrow().render()
    }

    /// Wait until the fetch has resolved and return the final state
    pub async fn settled(&mut self) -> WeatherState {
        match self.state.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            // Task ended without publishing (panicked or aborted)
            Err(_) => WeatherState::Failed(FETCH_FAILED_MESSAGE.to_string()),
        }
    }

    /// Unmount the view, cancelling an in-flight fetch
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for WeatherView {
    fn drop(&mut self) {
        if !self.task.is_finished() {
            tracing::debug!("Cancelling in-flight weather fetch");
        }
        self.task.abort();
    }
}

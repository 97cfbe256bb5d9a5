//! Views
//!
//! Each route renders into a [`Page`]: an optional heading followed by
//! text lines. The server turns pages into HTML, the CLI prints them.
//!
//! - [`welcome`]: static landing page
//! - [`health`]: status line and the current timestamp
//! - [`weather`]: three-state view over one Open-Meteo fetch
//! - [`not_found`]: fallback for unknown paths

pub mod health;
pub mod not_found;
pub mod page;
pub mod weather;
pub mod welcome;

pub use page::Page;
pub use weather::{WeatherState, WeatherView};

use std::sync::Arc;

use crate::clock::Clock;
use crate::router::Route;
use crate::weather::WeatherSource;

/// Dependencies handed to views when they mount
#[derive(Clone)]
pub struct ViewContext {
    pub weather: Arc<dyn WeatherSource>,
    pub clock: Arc<dyn Clock>,
}

impl ViewContext {
    pub fn new(weather: Arc<dyn WeatherSource>, clock: Arc<dyn Clock>) -> Self {
        Self { weather, clock }
    }
}

/// Mount the view for `route`, wait until it has settled and render it
pub async fn render_settled(route: Route, ctx: &ViewContext) -> Page {
    match route {
        Route::Welcome => welcome::render(),
        Route::Health => health::render(ctx.clock.as_ref()),
        Route::Weather => {
            let mut view = WeatherView::mount(Arc::clone(&ctx.weather));
            view.settled().await.render()
        }
        Route::NotFound => not_found::render(),
    }
}

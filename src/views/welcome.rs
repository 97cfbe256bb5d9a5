//! Welcome View

use super::Page;

pub const HEADING: &str = "Welcome";

/// Static landing page
pub fn render() -> Page {
    Page::new()
        .heading(HEADING)
        .line("Welcome to Weatherdeck.")
        .line("Visit /health for service status or /weather for current conditions.")
}

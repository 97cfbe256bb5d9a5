//! Not Found View

use super::Page;

pub const HEADING: &str = "Page Not Found";

pub fn render() -> Page {
    Page::new()
        .heading(HEADING)
        .line("The page you're looking for doesn't exist.")
}

//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod loading;
pub mod nav;

pub use loading::Loading;
pub use nav::Nav;

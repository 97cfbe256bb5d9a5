//! Pages
//!
//! Top-level page components for each route.

pub mod health;
pub mod weather;
pub mod welcome;

pub use health::Health;
pub use weather::Weather;
pub use welcome::Welcome;

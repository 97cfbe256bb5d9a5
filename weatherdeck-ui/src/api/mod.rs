//! API Module
//!
//! HTTP client for Open-Meteo.

mod client;

pub use client::*;

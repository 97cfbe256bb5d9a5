//! Weatherdeck UI
//!
//! Single-page application with three routes built with Leptos (WASM):
//!
//! - `/` welcome page
//! - `/health` status and current timestamp
//! - `/weather` current temperature and wind speed from Open-Meteo
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The weather page calls Open-Meteo directly from the browser.

use leptos::*;

mod api;
mod app;
mod clock;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}

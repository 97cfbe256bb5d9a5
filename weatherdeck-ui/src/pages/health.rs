//! Health Page
//!
//! Status line and the timestamp of the render.

use leptos::*;

use crate::clock::{iso8601, Clock};

#[component]
pub fn Health() -> impl IntoView {
    let clock = use_context::<Clock>().unwrap_or_default();
    let timestamp = iso8601(clock.now());

    view! {
        <div>
            <h1>"Health Check"</h1>
            <p>"Status: OK"</p>
            <p>"Timestamp: " {timestamp}</p>
        </div>
    }
}

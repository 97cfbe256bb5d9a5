//! Loading Component

use leptos::*;

/// Loading indicator
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <span class="loading-spinner" />
            "Loading..."
        </div>
    }
}

//! Welcome Page

use leptos::*;
use leptos_router::*;

#[component]
pub fn Welcome() -> impl IntoView {
    view! {
        <div>
            <h1>"Welcome"</h1>
            <p>"Welcome to Weatherdeck."</p>
            <p>
                "Visit " <A href="/health">"/health"</A> " for service status or "
                <A href="/weather">"/weather"</A> " for current conditions."
            </p>
        </div>
    }
}

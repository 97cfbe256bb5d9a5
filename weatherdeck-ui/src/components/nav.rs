//! Navigation Component
//!
//! Header navigation bar with one link per route.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <NavLink href="/" label="Home" />
            <NavLink href="/health" label="Health" />
            <NavLink href="/weather" label="Weather" />
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A href=href active_class="active">
            {label}
        </A>
    }
}

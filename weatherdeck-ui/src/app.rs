//! App Root Component
//!
//! Main application component with routing.

use leptos::*;
use leptos_router::*;

use crate::clock::Clock;
use crate::components::Nav;
use crate::pages::{Health, Weather, Welcome};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(Clock::system());

    view! {
        <Router>
            <Nav />
            <main>
                <Routes>
                    <Route path="/" view=Welcome />
                    <Route path="/health" view=Health />
                    <Route path="/weather" view=Weather />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div>
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">"Go to Welcome"</A>
        </div>
    }
}

//! Weather Page
//!
//! Fetches once per mount and renders loading, error, or the two
//! current-weather fields. A response arriving after the page has been
//! unmounted is dropped instead of written into disposed signals.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::api;
use crate::components::Loading;

const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data";
const UNEXPECTED_SHAPE_MESSAGE: &str = "Unexpected weather data format";

/// Lifecycle of the page's single fetch
#[derive(Clone, Debug, PartialEq)]
enum WeatherState {
    Loading,
    Loaded(serde_json::Value),
    Failed(String),
}

/// Fields read from `current_weather`
#[derive(Clone, Copy, Debug, PartialEq)]
struct CurrentConditions {
    temperature: f64,
    windspeed: f64,
}

impl CurrentConditions {
    fn from_snapshot(snapshot: &serde_json::Value) -> Option<Self> {
        let current = snapshot.get("current_weather")?;
        Some(Self {
            temperature: current.get("temperature")?.as_f64()?,
            windspeed: current.get("windspeed")?.as_f64()?,
        })
    }
}

/// Shortest decimal form: `72`, `72.5`
fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Weather page component
#[component]
pub fn Weather() -> impl IntoView {
    let (state, set_state) = create_signal(WeatherState::Loading);

    let mounted = Rc::new(Cell::new(true));
    on_cleanup({
        let mounted = Rc::clone(&mounted);
        move || mounted.set(false)
    });

    spawn_local(async move {
        let next = match api::fetch_current_weather().await {
            Ok(snapshot) => WeatherState::Loaded(snapshot),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch weather: {}", e).into());
                WeatherState::Failed(FETCH_FAILED_MESSAGE.to_string())
            }
        };

        if mounted.get() {
            set_state.set(next);
        }
    });

    view! { <WeatherPanel state=state /> }
}

/// Renders one state: loading, then error, then the fields
#[component]
fn WeatherPanel(state: ReadSignal<WeatherState>) -> impl IntoView {
    view! {
        <div class="weather">
            {move || match state.get() {
                WeatherState::Loading => view! { <Loading /> }.into_view(),
                WeatherState::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
                WeatherState::Loaded(snapshot) => match CurrentConditions::from_snapshot(&snapshot) {
                    Some(current) => view! { <Conditions current=current /> }.into_view(),
                    None => {
                        web_sys::console::warn_1(&"Weather response has no current_weather fields".into());
                        view! { <ErrorMessage message=UNEXPECTED_SHAPE_MESSAGE.to_string() /> }.into_view()
                    }
                },
            }}
        </div>
    }
}

#[component]
fn ErrorMessage(message: String) -> impl IntoView {
    view! { <div class="error">{format!("Error: {}", message)}</div> }
}

#[component]
fn Conditions(current: CurrentConditions) -> impl IntoView {
    view! {
        <div>
            <h1>"Current Weather"</h1>
            <p>{format!("Temperature: {}°F", format_number(current.temperature))}</p>
            <p>{format!("Wind Speed: {} mph", format_number(current.windspeed))}</p>
        </div>
    }
}

//! Route Table
//!
//! Three fixed paths plus a catch-all.

use std::fmt;

/// A resolved navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Welcome,
    Health,
    Weather,
    NotFound,
}

impl Route {
    /// Every routable view, in navigation order
    pub const ALL: [Route; 3] = [Route::Welcome, Route::Health, Route::Weather];

    /// Resolve a request path. Query strings and fragments are ignored and a
    /// single trailing slash is tolerated.
    pub fn resolve(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };

        match path {
            "/" => Route::Welcome,
            "/health" => Route::Health,
            "/weather" => Route::Weather,
            _ => Route::NotFound,
        }
    }

    /// Canonical path, `None` for the fallback
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Route::Welcome => Some("/"),
            Route::Health => Some("/health"),
            Route::Weather => Some("/weather"),
            Route::NotFound => None,
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Route::Welcome => "Home",
            Route::Health => "Health",
            Route::Weather => "Weather",
            Route::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().unwrap_or("*"))
    }
}

//! Time Source
//!
//! Views never read the wall clock directly; they are handed a [`Clock`].
//! The server and CLI use [`SystemClock`], tests pin time with [`FixedClock`].

use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Mutex;

/// Source of "now" for rendering
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock returning a settable instant
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a clock frozen at `instant`
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    /// Move the clock to a new instant
    pub fn set(&self, instant: DateTime<Utc>) {
        let mut guard = self.instant.lock().unwrap_or_else(|e| e.into_inner());
        *guard = instant;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Format an instant as ISO-8601 with millisecond precision and a `Z` suffix,
/// e.g. `2024-01-15T12:00:00.000Z`.
pub fn iso8601(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

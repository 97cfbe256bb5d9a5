//! Time Source
//!
//! Provided through context so the health page never reads the wall clock
//! directly.

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of "now"
#[derive(Clone, Copy)]
pub struct Clock(fn() -> DateTime<Utc>);

impl Clock {
    pub fn system() -> Self {
        Self(Utc::now)
    }

    #[cfg(test)]
    pub fn fixed(now: fn() -> DateTime<Utc>) -> Self {
        Self(now)
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.0)()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::system()
    }
}

/// ISO-8601 with milliseconds and `Z`, e.g. `2024-01-15T12:00:00.000Z`
pub fn iso8601(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

//! Health View
//!
//! Status line plus the render-time timestamp. The timestamp comes from the
//! supplied clock, so two renders differ only where the clock moved.

use super::Page;
use crate::clock::{iso8601, Clock};

pub const HEADING: &str = "Health Check";
pub const STATUS_LINE: &str = "Status: OK";

pub fn render(clock: &dyn Clock) -> Page {
    Page::new()
        .heading(HEADING)
        .line(STATUS_LINE)
        .line(format!("Timestamp: {}", iso8601(clock.now())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, SystemClock};
    use chrono::{DateTime, TimeZone, Utc};

    fn timestamp_of(page: &Page) -> DateTime<Utc> {
        let line = page
            .lines
            .iter()
            .find_map(|l| l.strip_prefix("Timestamp: "))
            .unwrap();
        DateTime::parse_from_rfc3339(line).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_render_with_fixed_clock() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
        let page = render(&clock);

        assert_eq!(page.heading.as_deref(), Some("Health Check"));
        assert_eq!(
            page.lines,
            vec![
                "Status: OK".to_string(),
                "Timestamp: 2024-01-15T12:00:00.000Z".to_string()
            ]
        );
    }

    #[test]
    fn test_renders_differ_only_in_timestamp() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
        let first = render(&clock);

        clock.set(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 7).unwrap());
        let second = render(&clock);

        assert_eq!(first.heading, second.heading);
        assert_eq!(first.lines[0], second.lines[0]);
        assert_ne!(first.lines[1], second.lines[1]);
        assert!(timestamp_of(&second) > timestamp_of(&first));
    }

    #[test]
    fn test_system_clock_timestamp_not_stale() {
        // Millisecond output truncates, so compare against a truncated "before"
        let now = Utc::now();
        let sub_millis = i64::from(now.timestamp_subsec_nanos() % 1_000_000);
        let before = now - chrono::Duration::nanoseconds(sub_millis);
        let page = render(&SystemClock);

        assert!(timestamp_of(&page) >= before);
    }
}

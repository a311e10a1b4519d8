//! Testing utilities for notesort
//!
//! Fixed clocks and small fixture builders shared by unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::context::{ContextBuilder, RuleEvaluationContext};
use crate::engine::Clock;
use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};

/// The instant every fixture clock is pinned to: 2026-02-10 12:00 local
///
/// # Panics
/// Panics if the local time zone cannot represent the instant.
#[must_use]
pub fn fixture_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2026, 2, 10, 12, 0, 0)
        .single()
        .expect("fixture instant is unambiguous")
}

/// A clock pinned to `fixture_now()`
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixture_now())
}

/// The fixture day shifted by `days`, formatted `YYYY-MM-DD`
#[must_use]
pub fn day_offset(days: i64) -> String {
    let day: NaiveDate = fixture_now().date_naive() + Duration::days(days);
    day.format("%Y-%m-%d").to_string()
}

/// Start a context for `path`
#[must_use]
pub fn note(path: &str) -> ContextBuilder {
    RuleEvaluationContext::builder(path)
}

/// Values as owned strings
#[must_use]
pub fn values(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_today() {
        assert_eq!(fixed_clock().today(), NaiveDate::from_ymd_opt(2026, 2, 10).unwrap());
    }

    #[test]
    fn test_day_offset() {
        assert_eq!(day_offset(0), "2026-02-10");
        assert_eq!(day_offset(3), "2026-02-13");
        assert_eq!(day_offset(-10), "2026-01-31");
    }

    #[test]
    fn test_note_builder() {
        let ctx = note("a/b.md").build();
        assert_eq!(ctx.file.basename, "b");
    }
}

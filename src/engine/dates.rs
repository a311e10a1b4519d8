//! Date parsing and sort key value helpers
//!
//! Dates are always interpreted in local time: a bare `2026-02-12` means local
//! midnight of that day, never UTC midnight. Parsing tries a fixed list of
//! formats and gives up quietly.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use std::sync::LazyLock;

static EMBEDDED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})-(\d{2})-(\d{2})").expect("embedded date pattern is valid")
});

static LEADING_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(?:$|[T\s])").expect("leading date pattern is valid")
});

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const SORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Strip wiki-link brackets and quotes around a date value
fn unwrap_value(raw: &str) -> &str {
    let mut value = raw.trim();
    if let Some(inner) = value.strip_prefix("[[").and_then(|v| v.strip_suffix("]]")) {
        value = inner.split('|').next().unwrap_or(inner).trim();
    }
    value.trim_matches(|c| c == '"' || c == '\'').trim()
}

fn local_midnight(date: NaiveDate) -> Option<DateTime<Local>> {
    date.and_hms_opt(0, 0, 0)?.and_local_timezone(Local).earliest()
}

/// Parse a value as a local date/time
///
/// Accepts RFC 3339 (converted to local time), ISO-like date-times without an
/// offset (taken as local) and bare dates (local midnight).
#[must_use]
pub fn parse_date_value(raw: &str) -> Option<DateTime<Local>> {
    let value = unwrap_value(raw);
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Local.from_local_datetime(&naive).earliest();
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(local_midnight)
}

/// Find a `YYYY-MM-DD` date anywhere in the text, e.g. a daily note name
#[must_use]
pub fn find_embedded_date(text: &str) -> Option<DateTime<Local>> {
    EMBEDDED_DATE.captures_iter(text).find_map(|caps| {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day).and_then(local_midnight)
    })
}

/// Whether the value starts with an ISO date
#[must_use]
pub fn looks_like_date(value: &str) -> bool {
    LEADING_DATE.is_match(unwrap_value(value))
}

/// Format a timestamp as a fixed-width sortable string
///
/// `day_only` zeroes the time of day.
#[must_use]
pub fn format_sort_timestamp(at: &DateTime<Local>, day_only: bool) -> String {
    if day_only {
        format!("{}-00-00-00", at.format("%Y-%m-%d"))
    } else {
        at.format(SORT_TIMESTAMP_FORMAT).to_string()
    }
}

/// Format a file timestamp as an ISO-like local string
#[must_use]
pub fn format_iso_local(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Map every ASCII digit `d` to `9 - d`, leaving other characters alone
///
/// Only gives a descending order for fixed-width, digit-dominant fragments.
#[must_use]
pub fn invert_digits(fragment: &str) -> String {
    fragment
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from(b'0' + (9 - d as u8)),
            _ => c,
        })
        .collect()
}

/// Make a fragment safe to join with `separator`
///
/// Whitespace runs become single hyphens, separator occurrences become
/// hyphens, and leading/trailing hyphens and underscores are trimmed.
#[must_use]
pub fn sanitize_fragment(raw: &str, separator: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join("-");
    let replaced = if separator.is_empty() {
        collapsed
    } else {
        collapsed.replace(separator, "-")
    };
    replaced.trim_matches(|c| c == '-' || c == '_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_bare_date_is_local_midnight() {
        let dt = parse_date_value("2026-02-12").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2026, 2, 12));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
    }

    #[test]
    fn test_parse_local_datetime() {
        let dt = parse_date_value("2026-02-12T14:30").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (14, 30));

        let dt = parse_date_value("2026-02-12 09:05:07").unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (9, 5, 7));
    }

    #[test]
    fn test_parse_rfc3339_converts_to_local() {
        let dt = parse_date_value("2026-02-12T10:00:00Z").unwrap();
        let expected = Utc.with_ymd_and_hms(2026, 2, 12, 10, 0, 0).unwrap();
        assert_eq!(dt.with_timezone(&Utc), expected);
    }

    #[test]
    fn test_parse_wikilink_and_quotes() {
        assert!(parse_date_value("[[2026-02-12]]").is_some());
        assert!(parse_date_value("[[2026-02-12|Thursday]]").is_some());
        assert!(parse_date_value("\"2026-02-12\"").is_some());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date_value("").is_none());
        assert!(parse_date_value("tomorrow").is_none());
        assert!(parse_date_value("2026-13-40").is_none());
        assert!(parse_date_value("2026-02-09 Daily").is_none());
    }

    #[test]
    fn test_find_embedded_date() {
        let dt = find_embedded_date("2026-02-09 Weekly Review").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2026, 2, 9));
        assert!(find_embedded_date("Meeting notes").is_none());
        assert!(find_embedded_date("9999-99-99 then 2026-01-05").is_some());
    }

    #[test]
    fn test_looks_like_date() {
        assert!(looks_like_date("2026-02-12"));
        assert!(looks_like_date("2026-02-12T08:00"));
        assert!(!looks_like_date("2026-02-12abc"));
        assert!(!looks_like_date("high"));
        assert!(!looks_like_date("01 Action Items"));
    }

    #[test]
    fn test_format_sort_timestamp() {
        let dt = Local.with_ymd_and_hms(2026, 2, 12, 13, 4, 5).unwrap();
        assert_eq!(format_sort_timestamp(&dt, false), "2026-02-12-13-04-05");
        assert_eq!(format_sort_timestamp(&dt, true), "2026-02-12-00-00-00");
    }

    #[test]
    fn test_invert_digits() {
        assert_eq!(invert_digits("2026-02-12"), "7973-97-87");
        assert_eq!(invert_digits("000"), "999");
        assert_eq!(invert_digits("a1b"), "a8b");
        assert_eq!(invert_digits(""), "");
    }

    #[test]
    fn test_sanitize_fragment() {
        assert_eq!(sanitize_fragment("01 Action Items", "_"), "01-Action-Items");
        assert_eq!(sanitize_fragment("  multi\tline\nvalue ", "_"), "multi-line-value");
        assert_eq!(sanitize_fragment("snake_case_value", "_"), "snake-case-value");
        assert_eq!(sanitize_fragment("--edge--", "_"), "edge");
        assert_eq!(sanitize_fragment("a|b", "|"), "a-b");
        assert_eq!(sanitize_fragment("   ", "_"), "");
    }
}

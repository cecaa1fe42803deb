//! Flexible parsing for the date strings the API emits.
//!
//! Endpoints are inconsistent: day-first Brazilian dates with two- or
//! four-digit years, ISO dates, with or without a time component. Parsing
//! tries each known format in order and reports "no match" as `None`, so
//! callers treat an unparseable date as a first-class outcome instead of an
//! error.

use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d/%m/%y", "%Y-%m-%d"];

/// Tries each supported format in order; date-only matches land at midnight.
pub fn parse_flexible(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Some(parsed);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(input, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }

    None
}

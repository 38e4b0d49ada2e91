//! Validation Utilities
//!
//! Format checks shared by the booking validator.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is valid"));

/// Separators tolerated in phone numbers: whitespace, hyphens, parentheses.
static PHONE_SEPARATORS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-()]").expect("separator pattern is valid"));

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern is valid")
});

/// Syntactic email check, not full RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Phone check after stripping separators: optional `+`, 1-16 ASCII digits, no leading zero.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(&PHONE_SEPARATORS_RE.replace_all(phone, ""))
}

/// 24-hour `H:MM` / `HH:MM`.
pub fn is_valid_time(time: &str) -> bool {
    TIME_RE.is_match(time)
}

/// Parse an appointment date as a calendar day.
///
/// Accepts `YYYY-MM-DD`; an RFC 3339 timestamp contributes its date part.
pub fn parse_calendar_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(date)
            .ok()
            .map(|dt| dt.date_naive())
    })
}

//! Timestamp parsing and formatting.
//!
//! Blog post timestamps travel through HTML `datetime-local` inputs, which carry no time
//! zone. Inkwell stores every timestamp as naive UTC, so values are read and written as UTC.

use chrono::NaiveDateTime;

const DATETIME_LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses an HTML `datetime-local` value, with or without seconds and fractional seconds.
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    DATETIME_LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value.trim(), format).ok())
}

/// Formats a timestamp for the `value` of a `datetime-local` input.
///
/// Seconds and fractional seconds are kept so that submitting an untouched form writes back
/// the exact stored timestamp.
pub fn format_datetime_local(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// Formats a timestamp for display, e.g. `January 15, 2024`.
pub fn format_display_date(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%B %-d, %Y").to_string()
}

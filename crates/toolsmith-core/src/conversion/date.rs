//! Date-time rendering in the `MM/dd/yyyy h:mm:ss AM|PM` layout.
//!
//! Text is parsed with the first matching layout below. Offsets are not
//! applied; a timestamp keeps the wall-clock time it was written with.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::validation::is_valid_text;

/// chrono layout of the rendered output.
pub const DISPLAY_FORMAT: &str = "%m/%d/%Y %-I:%M:%S %p";

const DATE_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Renders `moment` as `MM/dd/yyyy h:mm:ss AM|PM`.
///
/// ```
/// use chrono::NaiveDate;
/// use toolsmith_core::conversion::date::format_date_time;
///
/// let moment = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_opt(15, 4, 5)
///     .unwrap();
/// assert_eq!(format_date_time(&moment), "03/09/2024 3:04:05 PM");
/// ```
pub fn format_date_time(moment: &NaiveDateTime) -> String {
    moment.format(DISPLAY_FORMAT).to_string()
}

/// Parses date-time text in any supported layout.
pub fn parse_date_time(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    if let Ok(stamped) = DateTime::parse_from_rfc3339(text) {
        return Ok(stamped.naive_local());
    }
    if let Some(moment) = DATE_TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
    {
        return Ok(moment);
    }
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(text, layout).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::format(text, "date-time"))
}

/// Renders a dynamic value as a date string.
///
/// Non-blank text is parsed and reformatted. Blank text and values that are
/// not text render as the empty string.
pub fn to_date_string(value: &Value) -> Result<String> {
    match value {
        Value::String(text) if is_valid_text(text) => {
            parse_date_time(text).map(|moment| format_date_time(&moment))
        }
        _ => Ok(String::new()),
    }
}

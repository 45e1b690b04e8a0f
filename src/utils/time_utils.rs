use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::WORKBOOK;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
}

// Time Helper functions

/// Signed elapsed time in (fractional) hours. Negative when `end` precedes `start`.
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_milliseconds() as f64 / TimeUtils::MS_IN_H as f64
}

/// Parses a timestamp typed as text into a cell.
/// Tries ISO 8601 / RFC 3339 first, then the workbook's configured layouts,
/// then date-only layouts (read as midnight).
pub fn parse_timestamp_text(raw: &str) -> Option<NaiveDateTime> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    if let Some(dt) = WORKBOOK
        .datetime_formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(dt);
    }
    WORKBOOK
        .date_formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .map(|d| d.and_time(NaiveTime::MIN))
}

pub fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

/// Human-friendly hours, e.g. `2.50h` or `-0.75h`.
pub fn format_hours(hours: f64) -> String {
    if hours.is_finite() {
        format!("{:.2}h", hours)
    } else {
        "-".to_string()
    }
}

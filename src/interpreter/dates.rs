//! Report month dates: spreadsheet serials and free-form text

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};

/// Calendar-date formats tried in order for textual report months
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y"];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Convert a 1900-date-system serial to a calendar date.
///
/// Serial 1 is 1900-01-01. The system counts a 1900-02-29 that never
/// existed (serial 60), so serials from 61 on are one day ahead of a plain
/// day count; serial 60 itself resolves to 1900-02-28. The time-of-day
/// fraction is dropped. Serials below 1 do not name a day.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let days = serial.floor();
    if days < 1.0 || days > u32::MAX as f64 {
        return None;
    }
    let days = days as u64;

    match days {
        60 => NaiveDate::from_ymd_opt(1900, 2, 28),
        d if d < 60 => NaiveDate::from_ymd_opt(1899, 12, 31)?.checked_add_days(Days::new(d)),
        d => NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(d)),
    }
}

/// Parse a report month typed as text.
///
/// Timestamps with an offset are reduced to their UTC day. A bare
/// `"March 2024"` means the first of that month.
pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.date());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    NaiveDate::parse_from_str(&format!("1 {}", text), "%d %B %Y").ok()
}

/// `YYYY-MM-DD` with zero-padded month and day
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

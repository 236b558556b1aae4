// Time utility functions
// Pure string/date formatting with graceful placeholders

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use thiserror::Error;

/// Placeholder shown when a full `hh:mm:ss` display has no value.
pub const PLACEHOLDER_LONG: &str = "--:--:--";
/// Placeholder for the short `hh:mm` display.
pub const PLACEHOLDER_SHORT: &str = "--:--";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a valid HH:MM:SS time: '{0}'")]
pub struct TimeParseError(pub String);

/// Parse a 24-hour `HH:MM:SS` string.
pub fn parse_time(value: &str) -> Result<NaiveTime, TimeParseError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .map_err(|_| TimeParseError(value.to_string()))
}

/// Convert `HH:MM:SS` to `hh:mm:ss AM/PM`.
///
/// Hour 0 maps to 12 AM, noon stays 12 PM, 13..23 map to 1..11 PM.
/// Malformed or empty input degrades to [`PLACEHOLDER_LONG`].
pub fn format_12_hour(value: &str) -> String {
    match parse_time(value) {
        Ok(time) => {
            let (hour, ampm) = twelve_hour_parts(time.hour());
            format!("{:02}:{:02}:{:02} {}", hour, time.minute(), time.second(), ampm)
        }
        Err(_) => PLACEHOLDER_LONG.to_string(),
    }
}

/// Convert `HH:MM:SS` to the shorter `hh:mm AM/PM` form.
///
/// Malformed or empty input degrades to [`PLACEHOLDER_SHORT`].
pub fn format_short(value: &str) -> String {
    match parse_time(value) {
        Ok(time) => {
            let (hour, ampm) = twelve_hour_parts(time.hour());
            format!("{:02}:{:02} {}", hour, time.minute(), ampm)
        }
        Err(_) => PLACEHOLDER_SHORT.to_string(),
    }
}

fn twelve_hour_parts(hour24: u32) -> (u32, &'static str) {
    let ampm = if hour24 >= 12 { "PM" } else { "AM" };
    let hour = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    (hour, ampm)
}

const URDU_MONTHS: [&str; 12] = [
    "جنوری",
    "فروری",
    "مارچ",
    "اپریل",
    "مئی",
    "جون",
    "جولائی",
    "اگست",
    "ستمبر",
    "اکتوبر",
    "نومبر",
    "دسمبر",
];

/// Render a Gregorian date as `day month-name year` with Urdu month names.
pub fn format_urdu_date(date: NaiveDate) -> String {
    let month = URDU_MONTHS[(date.month0()) as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

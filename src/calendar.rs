// src/calendar.rs - Day-type classification for pattern lookups

use chrono::{Datelike, NaiveDate, Weekday};

pub const HOLIDAY: &str = "holiday";
pub const WEEKEND: &str = "weekend";
pub const WEEKDAY: &str = "weekday";

/// Classify a date the way the presence log labels its rows.
/// Holidays take precedence over weekends.
pub fn classify_day(date: NaiveDate, holidays: &[NaiveDate]) -> &'static str {
    if holidays.contains(&date) {
        HOLIDAY
    } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        WEEKEND
    } else {
        WEEKDAY
    }
}

/// Meteorological season for the northern hemisphere.
pub fn season(month: u32) -> &'static str {
    match month {
        12 | 1 | 2 => "winter",
        3..=5 => "spring",
        6..=8 => "summer",
        _ => "autumn",
    }
}

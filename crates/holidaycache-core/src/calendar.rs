//! Weekday arithmetic and input parsing. Nothing in here touches the cache.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::HolidayError;

/// Years the remote API is asked about. Others go straight to the fallback table.
pub const MIN_SUPPORTED_YEAR: i32 = 1900;
pub const MAX_SUPPORTED_YEAR: i32 = 2200;

/// Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_supported_year(year: i32) -> bool {
    (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year)
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, HolidayError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| HolidayError::InvalidDate(trimmed.to_string()))
}

pub fn parse_year(input: &str) -> Result<i32, HolidayError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i32>()
        .ok()
        .filter(|year| *year > 0)
        .ok_or_else(|| HolidayError::InvalidYear(trimmed.to_string()))
}

//! `YYYY/MM/DD` formatting and parsing.
//!
//! The formatted strings double as record keys, so string order must equal
//! chronological order. Zero padding guarantees that.

use chrono::NaiveDate;

use crate::date::BsDate;
use crate::error::{CalendarError, Result};

/// Format a BS triple as `"YYYY/MM/DD"`.
///
/// Does not validate: formatting is presentation, not validation.
pub fn format_bs(year: i32, month: u32, day: u32) -> String {
    format!("{:04}/{:02}/{:02}", year, month, day)
}

/// Format a Gregorian date as `"YYYY/MM/DD"`.
pub fn format_ad(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

fn parse_error(input: &str, reason: impl Into<String>) -> CalendarError {
    CalendarError::Parse {
        input: input.to_string(),
        reason: reason.into(),
    }
}

fn split_triple(input: &str, sep: char) -> Result<(i32, u32, u32)> {
    let parts: Vec<&str> = input.trim().split(sep).collect();
    if parts.len() != 3 {
        return Err(parse_error(
            input,
            format!("expected three '{}'-separated fields", sep),
        ));
    }
    if parts.iter().any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit())) {
        return Err(parse_error(input, "fields must be decimal digits"));
    }
    let year = parts[0]
        .parse::<i32>()
        .map_err(|e| parse_error(input, format!("year: {}", e)))?;
    let month = parts[1]
        .parse::<u32>()
        .map_err(|e| parse_error(input, format!("month: {}", e)))?;
    let day = parts[2]
        .parse::<u32>()
        .map_err(|e| parse_error(input, format!("day: {}", e)))?;
    Ok((year, month, day))
}

/// Parse a `"YYYY/MM/DD"` BS key into a validated date.
///
/// # Errors
/// - `CalendarError::Parse` for malformed text.
/// - The [`BsDate::new`] errors for values outside the reference table.
pub fn parse_bs(input: &str) -> Result<BsDate> {
    let (year, month, day) = split_triple(input, '/')?;
    BsDate::new(year, month, day)
}

/// Parse a Gregorian date written as `YYYY-MM-DD` or `YYYY/MM/DD`.
///
/// # Errors
/// Returns `CalendarError::Parse` if the text is malformed or names a day
/// that does not exist.
pub fn parse_ad(input: &str) -> Result<NaiveDate> {
    let sep = if input.contains('-') { '-' } else { '/' };
    let (year, month, day) = split_triple(input, sep)?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| parse_error(input, "no such Gregorian date"))
}

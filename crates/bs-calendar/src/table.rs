//! The BS reference table and the length lookups built on it.
//!
//! Bikram Sambat month lengths follow no closed-form rule, so every supported
//! year carries an explicit row of twelve month lengths. Supporting another
//! year means appending a verified row here; nothing is ever extrapolated.

use crate::error::{CalendarError, Result};

/// Per-year month lengths, sorted by year, Baisakh first.
static REFERENCE_TABLE: &[(i32, [u8; 12])] = &[
    (2082, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]),
    (2083, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]),
    (2084, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]),
    (2085, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]),
    (2086, [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31]),
    (2087, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]),
    (2088, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]),
    (2089, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]),
    (2090, [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30]),
    (2091, [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30]),
    (2092, [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31]),
];

fn year_row(year: i32) -> Result<&'static [u8; 12]> {
    REFERENCE_TABLE
        .binary_search_by_key(&year, |&(y, _)| y)
        .map(|idx| &REFERENCE_TABLE[idx].1)
        .map_err(|_| CalendarError::OutOfRangeYear { year })
}

/// Check that `month` is in 1..=12.
pub(crate) fn check_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::InvalidMonth { month })
    }
}

/// Number of days in a BS month.
///
/// # Errors
/// Returns `CalendarError::OutOfRangeYear` if `year` has no table row.
/// Returns `CalendarError::InvalidMonth` if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let row = year_row(year)?;
    check_month(month)?;
    Ok(u32::from(row[month as usize - 1]))
}

/// Number of days in a BS year (the sum of its twelve month lengths).
///
/// # Errors
/// Returns `CalendarError::OutOfRangeYear` if `year` has no table row.
pub fn days_in_year(year: i32) -> Result<u32> {
    let row = year_row(year)?;
    Ok(row.iter().map(|&d| u32::from(d)).sum())
}

/// All BS years present in the reference table, ascending.
pub fn supported_years() -> Vec<i32> {
    REFERENCE_TABLE.iter().map(|&(y, _)| y).collect()
}

/// First and last supported BS year, inclusive.
pub fn supported_range() -> (i32, i32) {
    let first = REFERENCE_TABLE.first().map_or(0, |&(y, _)| y);
    let last = REFERENCE_TABLE.last().map_or(0, |&(y, _)| y);
    (first, last)
}

/// Whether `year` has a row in the reference table.
pub fn is_supported_year(year: i32) -> bool {
    year_row(year).is_ok()
}

//! Error types for calendar conversion operations.

use thiserror::Error;

use crate::date::BsDate;

/// Errors that can occur while converting, validating, or parsing dates.
///
/// All variants are local validation failures. None of them are transient,
/// so retrying the same call never helps.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The BS year has no row in the reference table.
    #[error("BS year {year} is not in the reference table")]
    OutOfRangeYear { year: i32 },

    /// Month outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },

    /// Day outside 1..=max_day for the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay { day: u32, month: u32, max_day: u32 },

    /// BS -> AD only walks forward from the anchor; earlier targets are rejected.
    #[error("BS date {target} is before the conversion anchor")]
    InvalidRange { target: BsDate },

    /// Text could not be read as a date.
    #[error("cannot parse '{input}' as a date: {reason}")]
    Parse { input: String, reason: String },

    /// Gregorian arithmetic left the range chrono can represent.
    #[error("day offset {offset} from the anchor overflows the Gregorian calendar")]
    AdOverflow { offset: i64 },
}

/// Convenience alias used throughout bs-calendar.
pub type Result<T> = std::result::Result<T, CalendarError>;

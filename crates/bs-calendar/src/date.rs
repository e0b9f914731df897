//! The validated Bikram Sambat date value.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::convert;
use crate::error::{CalendarError, Result};
use crate::format;
use crate::table;

/// A date in the Bikram Sambat calendar.
///
/// Always valid against the reference table: the year has a table row and the
/// day does not exceed that month's length. Field order makes the derived
/// ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBsDate", into = "RawBsDate")]
pub struct BsDate {
    year: i32,
    month: u8,
    day: u8,
}

#[derive(Serialize, Deserialize)]
struct RawBsDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawBsDate> for BsDate {
    type Error = CalendarError;

    fn try_from(raw: RawBsDate) -> Result<Self> {
        BsDate::new(raw.year, raw.month, raw.day)
    }
}

impl From<BsDate> for RawBsDate {
    fn from(date: BsDate) -> Self {
        RawBsDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl BsDate {
    /// Build a BS date, validating it against the reference table.
    ///
    /// # Errors
    /// - `CalendarError::OutOfRangeYear` if the year has no table row.
    /// - `CalendarError::InvalidMonth` if `month` is not in 1..=12.
    /// - `CalendarError::InvalidDay` if `day` is 0 or past the month's length.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        let max_day = table::days_in_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self::from_parts(year, month, day))
    }

    /// Caller guarantees the parts were already checked against the table.
    pub(crate) const fn from_parts(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: month as u8,
            day: day as u8,
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// Month, 1 (Baisakh) ..= 12 (Chaitra).
    pub fn month(self) -> u32 {
        u32::from(self.month)
    }

    pub fn day(self) -> u32 {
        u32::from(self.day)
    }

    /// The Gregorian date this BS date falls on.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidRange` for dates before the anchor.
    pub fn to_ad(self) -> Result<NaiveDate> {
        convert::bs_to_ad(self.year(), self.month(), self.day())
    }

    /// The BS date a Gregorian date falls on.
    pub fn from_ad(date: NaiveDate) -> Result<Self> {
        convert::ad_to_bs(date)
    }

    /// Day of the week, taken from the Gregorian equivalent.
    pub fn weekday(self) -> Result<Weekday> {
        Ok(self.to_ad()?.weekday())
    }
}

impl fmt::Display for BsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::format_bs(self.year, self.month(), self.day()))
    }
}

impl FromStr for BsDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        format::parse_bs(s)
    }
}

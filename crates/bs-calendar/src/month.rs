//! A BS year/month pair, used for navigating and querying one month at a time.

use std::fmt;

use serde::Serialize;

use crate::convert;
use crate::date::BsDate;
use crate::error::{CalendarError, Result};
use crate::format::format_bs;
use crate::grid::{month_grid, MonthGrid};
use crate::table::{check_month, days_in_month, is_supported_year};

/// A month of a supported BS year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// # Errors
    /// `CalendarError::OutOfRangeYear` or `CalendarError::InvalidMonth`.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !is_supported_year(year) {
            return Err(CalendarError::OutOfRangeYear { year });
        }
        check_month(month)?;
        Ok(Self { year, month })
    }

    /// The month a date belongs to.
    pub fn containing(date: BsDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's date.
    pub fn current() -> Result<Self> {
        Ok(Self::containing(convert::today()?))
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// The following month, rolling Chaitra over into the next year's Baisakh.
    ///
    /// # Errors
    /// `CalendarError::OutOfRangeYear` when that year is not in the table.
    pub fn next(self) -> Result<Self> {
        match self.month {
            12 => Self::new(self.year + 1, 1),
            m => Self::new(self.year, m + 1),
        }
    }

    /// The preceding month, rolling Baisakh back into the previous year's Chaitra.
    ///
    /// # Errors
    /// `CalendarError::OutOfRangeYear` when that year is not in the table.
    pub fn prev(self) -> Result<Self> {
        match self.month {
            1 => Self::new(self.year - 1, 12),
            m => Self::new(self.year, m - 1),
        }
    }

    /// Step by `delta` months, negative going backwards.
    pub fn offset(self, delta: i32) -> Result<Self> {
        let mut current = self;
        for _ in 0..delta.unsigned_abs() {
            current = if delta > 0 {
                current.next()?
            } else {
                current.prev()?
            };
        }
        Ok(current)
    }

    pub fn day_count(self) -> Result<u32> {
        days_in_month(self.year, self.month)
    }

    pub fn first_day(self) -> BsDate {
        BsDate::from_parts(self.year, self.month, 1)
    }

    pub fn last_day(self) -> Result<BsDate> {
        Ok(BsDate::from_parts(self.year, self.month, self.day_count()?))
    }

    /// Inclusive `"YYYY/MM/DD"` bounds of the month, for range queries over
    /// date-keyed records.
    pub fn key_range(self) -> Result<(String, String)> {
        let last = self.day_count()?;
        Ok((
            format_bs(self.year, self.month, 1),
            format_bs(self.year, self.month, last),
        ))
    }

    pub fn grid(self) -> Result<MonthGrid> {
        month_grid(self.year, self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}", self.year, self.month)
    }
}

//! Month grid builder -- lays a BS month onto a Sunday-first 7-column week grid.
//!
//! Day 1 sits in the column of its Gregorian weekday (0 = Sunday). Each
//! populated cell carries its AD date so renderers never convert again.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convert::bs_to_ad;
use crate::date::BsDate;
use crate::error::{CalendarError, Result};
use crate::table::days_in_month;

/// One week row. `None` pads days outside the month.
pub type Week = [Option<GridCell>; 7];

/// A populated grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub bs: BsDate,
    pub ad: NaiveDate,
}

/// A BS month laid out as weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Populated cells in row-major order, i.e. days 1..=N.
    pub fn days(&self) -> impl Iterator<Item = &GridCell> + '_ {
        self.weeks.iter().flat_map(|w| w.iter().flatten())
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.days().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cell for a given day of the month, if present.
    pub fn cell(&self, day: u32) -> Option<&GridCell> {
        self.days().find(|c| c.bs.day() == day)
    }

    /// Column of day 1, 0 = Sunday.
    pub fn first_column(&self) -> Option<usize> {
        self.weeks
            .first()
            .and_then(|w| w.iter().position(Option::is_some))
    }
}

/// Build the week grid for a BS month.
///
/// # Errors
/// Propagates the errors of [`days_in_month`] and [`bs_to_ad`] for the
/// month's first day.
pub fn month_grid(year: i32, month: u32) -> Result<MonthGrid> {
    let n = days_in_month(year, month)?;
    let first_ad = bs_to_ad(year, month, 1)?;
    let first_column = first_ad.weekday().num_days_from_sunday() as usize;

    let mut weeks: Vec<Week> = Vec::with_capacity((first_column + n as usize).div_ceil(7));
    let mut week: Week = [None; 7];
    let mut column = first_column;

    for day in 1..=n {
        let offset = u64::from(day - 1);
        let ad = first_ad
            .checked_add_days(Days::new(offset))
            .ok_or(CalendarError::AdOverflow {
                offset: i64::from(day - 1),
            })?;
        week[column] = Some(GridCell {
            bs: BsDate::from_parts(year, month, day),
            ad,
        });

        column += 1;
        if column == 7 {
            weeks.push(week);
            week = [None; 7];
            column = 0;
        }
    }

    if column > 0 {
        weeks.push(week);
    }

    debug!(year, month, days = n, first_column, rows = weeks.len(), "built month grid");
    Ok(MonthGrid { year, month, weeks })
}

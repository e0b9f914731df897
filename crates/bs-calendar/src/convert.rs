//! BS <-> AD conversion by signed day offsets from a single anchor.
//!
//! The anchor pairs 2082/01/01 BS with 2025-04-14 AD. BS -> AD walks forward
//! from the anchor summing table month lengths; AD -> BS starts at the anchor
//! and normalizes the day counter month by month in either direction.

use std::cmp::Ordering;

use chrono::{Days, Local, NaiveDate};
use tracing::trace;

use crate::date::BsDate;
use crate::error::{CalendarError, Result};
use crate::table::{days_in_month, days_in_year};

const ANCHOR_BS: BsDate = BsDate::from_parts(2082, 1, 1);

/// The BS side of the anchor.
pub fn anchor_bs() -> BsDate {
    ANCHOR_BS
}

/// The AD side of the anchor.
pub fn anchor_ad() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 14).expect("anchor is a valid Gregorian date")
}

/// Signed day count from the anchor to `target`.
///
/// Only targets on or after the anchor's month are walked.
fn offset_from_anchor(target: BsDate) -> Result<i64> {
    let anchor = ANCHOR_BS;
    let (year, month, day) = (target.year(), target.month(), target.day());

    let rest_of_anchor_month = || -> Result<i64> {
        Ok(i64::from(days_in_month(anchor.year(), anchor.month())?) - i64::from(anchor.day()))
    };

    let mut total: i64 = 0;
    match (year.cmp(&anchor.year()), month.cmp(&anchor.month())) {
        (Ordering::Less, _) | (Ordering::Equal, Ordering::Less) => {
            return Err(CalendarError::InvalidRange { target });
        }
        (Ordering::Equal, Ordering::Equal) => {
            return Ok(i64::from(day) - i64::from(anchor.day()));
        }
        (Ordering::Equal, Ordering::Greater) => {
            total += rest_of_anchor_month()?;
            for m in anchor.month() + 1..month {
                total += i64::from(days_in_month(year, m)?);
            }
        }
        (Ordering::Greater, _) => {
            total += rest_of_anchor_month()?;
            for m in anchor.month() + 1..=12 {
                total += i64::from(days_in_month(anchor.year(), m)?);
            }
            for y in anchor.year() + 1..year {
                total += i64::from(days_in_year(y)?);
            }
            for m in 1..month {
                total += i64::from(days_in_month(year, m)?);
            }
        }
    }
    Ok(total + i64::from(day))
}

fn shift(base: NaiveDate, offset: i64) -> Result<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    let shifted = if offset >= 0 {
        base.checked_add_days(days)
    } else {
        base.checked_sub_days(days)
    };
    shifted.ok_or(CalendarError::AdOverflow { offset })
}

/// Convert a BS date to its Gregorian equivalent.
///
/// # Errors
/// - `CalendarError::OutOfRangeYear`, `InvalidMonth`, `InvalidDay` when the
///   triple is not a valid table date.
/// - `CalendarError::InvalidRange` when the target is before the anchor month.
pub fn bs_to_ad(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    let target = BsDate::new(year, month, day)?;
    let offset = offset_from_anchor(target)?;
    trace!(%target, offset, "bs -> ad");
    shift(anchor_ad(), offset)
}

/// Convert a Gregorian date to BS.
///
/// # Errors
/// Returns `CalendarError::OutOfRangeYear` when the date falls outside the
/// years covered by the reference table.
pub fn ad_to_bs(date: NaiveDate) -> Result<BsDate> {
    let diff_days = date.signed_duration_since(anchor_ad()).num_days();

    let mut year = ANCHOR_BS.year();
    let mut month = ANCHOR_BS.month();
    let mut day = i64::from(ANCHOR_BS.day()) + diff_days;

    if diff_days >= 0 {
        loop {
            let len = i64::from(days_in_month(year, month)?);
            if day <= len {
                break;
            }
            day -= len;
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }
    } else {
        while day <= 0 {
            month -= 1;
            if month < 1 {
                month = 12;
                year -= 1;
            }
            day += i64::from(days_in_month(year, month)?);
        }
    }

    trace!(%date, diff_days, year, month, day, "ad -> bs");
    Ok(BsDate::from_parts(year, month, day as u32))
}

/// The current system date in AD.
pub fn today_ad() -> NaiveDate {
    Local::now().date_naive()
}

/// The current system date in BS.
///
/// # Errors
/// Returns `CalendarError::OutOfRangeYear` once the clock passes the table.
pub fn today() -> Result<BsDate> {
    ad_to_bs(today_ad())
}

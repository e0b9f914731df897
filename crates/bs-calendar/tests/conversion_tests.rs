//! Tests for BS <-> AD conversion.

use bs_calendar::{
    ad_to_bs, anchor_ad, anchor_bs, bs_to_ad, days_in_month, today, today_ad, BsDate,
    CalendarError,
};
use chrono::{Datelike, Days, NaiveDate, Weekday};

fn ad(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn bs(y: i32, m: u32, d: u32) -> BsDate {
    BsDate::new(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Anchor
// ---------------------------------------------------------------------------

#[test]
fn anchor_maps_both_ways() {
    assert_eq!(anchor_bs(), bs(2082, 1, 1));
    assert_eq!(anchor_ad(), ad(2025, 4, 14));
    assert_eq!(bs_to_ad(2082, 1, 1).unwrap(), ad(2025, 4, 14));
    assert_eq!(ad_to_bs(ad(2025, 4, 14)).unwrap(), bs(2082, 1, 1));
}

#[test]
fn anchor_is_a_monday() {
    assert_eq!(anchor_ad().weekday(), Weekday::Mon);
    assert_eq!(anchor_bs().weekday().unwrap(), Weekday::Mon);
}

// ---------------------------------------------------------------------------
// BS -> AD
// ---------------------------------------------------------------------------

#[test]
fn same_month_as_anchor() {
    assert_eq!(bs_to_ad(2082, 1, 31).unwrap(), ad(2025, 5, 14));
}

#[test]
fn later_month_of_anchor_year() {
    assert_eq!(bs_to_ad(2082, 2, 1).unwrap(), ad(2025, 5, 15));
    // Jestha 2082 has 32 days.
    assert_eq!(bs_to_ad(2082, 2, 32).unwrap(), ad(2025, 6, 15));
}

#[test]
fn last_day_of_anchor_year() {
    assert_eq!(bs_to_ad(2082, 12, 31).unwrap(), ad(2026, 4, 14));
}

#[test]
fn later_year_counts_the_rest_of_the_anchor_year() {
    // 2082 has 366 days in the table.
    assert_eq!(bs_to_ad(2083, 1, 1).unwrap(), ad(2026, 4, 15));
    // 2083 has 365.
    assert_eq!(bs_to_ad(2084, 1, 1).unwrap(), ad(2027, 4, 15));
}

#[test]
fn consecutive_bs_days_are_consecutive_ad_days() {
    let last = bs_to_ad(2082, 12, 31).unwrap();
    let first = bs_to_ad(2083, 1, 1).unwrap();
    assert_eq!(last.checked_add_days(Days::new(1)), Some(first));
}

#[test]
fn bs_to_ad_rejects_unknown_year() {
    assert_eq!(
        bs_to_ad(2081, 12, 30).unwrap_err(),
        CalendarError::OutOfRangeYear { year: 2081 }
    );
    assert_eq!(
        bs_to_ad(2093, 1, 1).unwrap_err(),
        CalendarError::OutOfRangeYear { year: 2093 }
    );
}

#[test]
fn bs_to_ad_rejects_bad_month_and_day() {
    assert_eq!(
        bs_to_ad(2082, 13, 1).unwrap_err(),
        CalendarError::InvalidMonth { month: 13 }
    );
    assert_eq!(
        bs_to_ad(2082, 1, 32).unwrap_err(),
        CalendarError::InvalidDay {
            day: 32,
            month: 1,
            max_day: 31
        }
    );
    assert_eq!(
        bs_to_ad(2082, 1, 0).unwrap_err(),
        CalendarError::InvalidDay {
            day: 0,
            month: 1,
            max_day: 31
        }
    );
}

// ---------------------------------------------------------------------------
// AD -> BS
// ---------------------------------------------------------------------------

#[test]
fn ad_to_bs_forward_normalization() {
    assert_eq!(ad_to_bs(ad(2025, 5, 14)).unwrap(), bs(2082, 1, 31));
    assert_eq!(ad_to_bs(ad(2025, 5, 15)).unwrap(), bs(2082, 2, 1));
    assert_eq!(ad_to_bs(ad(2026, 4, 14)).unwrap(), bs(2082, 12, 31));
    assert_eq!(ad_to_bs(ad(2026, 4, 15)).unwrap(), bs(2083, 1, 1));
}

#[test]
fn ad_before_the_table_is_out_of_range() {
    assert_eq!(
        ad_to_bs(ad(2025, 4, 13)).unwrap_err(),
        CalendarError::OutOfRangeYear { year: 2081 }
    );
    assert_eq!(
        ad_to_bs(ad(1990, 1, 1)).unwrap_err(),
        CalendarError::OutOfRangeYear { year: 2081 }
    );
}

#[test]
fn ad_after_the_table_is_out_of_range() {
    let last = bs_to_ad(2092, 12, days_in_month(2092, 12).unwrap()).unwrap();
    assert_eq!(ad_to_bs(last).unwrap(), bs(2092, 12, 31));

    let beyond = last.checked_add_days(Days::new(1)).unwrap();
    assert_eq!(
        ad_to_bs(beyond).unwrap_err(),
        CalendarError::OutOfRangeYear { year: 2093 }
    );
}

#[test]
fn bs_date_helpers_delegate_to_conversion() {
    let date = bs(2083, 1, 1);
    let gregorian = date.to_ad().unwrap();
    assert_eq!(gregorian, ad(2026, 4, 15));
    assert_eq!(BsDate::from_ad(gregorian).unwrap(), date);
    assert_eq!(date.weekday().unwrap(), Weekday::Wed);
}

// ---------------------------------------------------------------------------
// Round trip over the whole table
// ---------------------------------------------------------------------------

#[test]
fn every_table_date_round_trips() {
    let mut expected_ad = anchor_ad();
    for year in bs_calendar::supported_years() {
        for month in 1..=12 {
            for day in 1..=days_in_month(year, month).unwrap() {
                let converted = bs_to_ad(year, month, day).unwrap();
                assert_eq!(converted, expected_ad, "bs_to_ad({year}/{month}/{day})");
                assert_eq!(ad_to_bs(converted).unwrap(), bs(year, month, day));
                expected_ad = expected_ad.succ_opt().unwrap();
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Today
// ---------------------------------------------------------------------------

#[test]
fn today_agrees_with_system_date() {
    match today() {
        Ok(date) => {
            let back = date.to_ad().unwrap();
            let now = today_ad();
            // Allow for the clock crossing midnight between the two reads.
            assert!((now - back).num_days().abs() <= 1);
        }
        Err(err) => assert!(matches!(err, CalendarError::OutOfRangeYear { .. })),
    }
}

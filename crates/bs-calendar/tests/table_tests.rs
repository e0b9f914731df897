//! Tests for reference-table lookups.

use bs_calendar::{
    days_in_month, days_in_year, is_supported_year, supported_range, supported_years,
    CalendarError,
};

#[test]
fn baisakh_2082_has_31_days() {
    assert_eq!(days_in_month(2082, 1).unwrap(), 31);
}

#[test]
fn jestha_2082_has_32_days() {
    assert_eq!(days_in_month(2082, 2).unwrap(), 32);
}

#[test]
fn year_absent_from_table_is_out_of_range() {
    assert_eq!(
        days_in_month(1999, 1).unwrap_err(),
        CalendarError::OutOfRangeYear { year: 1999 }
    );
    assert_eq!(
        days_in_year(2093).unwrap_err(),
        CalendarError::OutOfRangeYear { year: 2093 }
    );
}

#[test]
fn missing_year_is_reported_before_bad_month() {
    // No 30-day fallback: an unknown year fails even with a nonsense month.
    assert_eq!(
        days_in_month(2000, 13).unwrap_err(),
        CalendarError::OutOfRangeYear { year: 2000 }
    );
}

#[test]
fn month_outside_1_to_12_is_invalid() {
    assert_eq!(
        days_in_month(2082, 0).unwrap_err(),
        CalendarError::InvalidMonth { month: 0 }
    );
    assert_eq!(
        days_in_month(2082, 13).unwrap_err(),
        CalendarError::InvalidMonth { month: 13 }
    );
}

#[test]
fn days_in_year_sums_the_row() {
    assert_eq!(days_in_year(2082).unwrap(), 366);
    assert_eq!(days_in_year(2083).unwrap(), 365);
    assert_eq!(days_in_year(2086).unwrap(), 365);
    assert_eq!(days_in_year(2092).unwrap(), 366);
}

#[test]
fn supported_years_are_ascending_and_contiguous() {
    let years = supported_years();
    assert_eq!(years.first(), Some(&2082));
    assert_eq!(years.last(), Some(&2092));
    for pair in years.windows(2) {
        assert_eq!(pair[1], pair[0] + 1, "gap after {}", pair[0]);
    }
    assert_eq!(supported_range(), (2082, 2092));
}

#[test]
fn every_row_has_twelve_positive_months_and_a_plausible_total() {
    for year in supported_years() {
        let mut total = 0;
        for month in 1..=12 {
            let len = days_in_month(year, month).unwrap();
            assert!((29..=32).contains(&len), "{year}/{month} has {len} days");
            total += len;
        }
        assert_eq!(total, days_in_year(year).unwrap());
        assert!(
            (354..=366).contains(&total),
            "year {year} has implausible length {total}"
        );
    }
}

#[test]
fn is_supported_year_matches_table() {
    assert!(is_supported_year(2082));
    assert!(is_supported_year(2092));
    assert!(!is_supported_year(2081));
    assert!(!is_supported_year(2093));
}

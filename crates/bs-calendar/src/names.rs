//! Month and weekday names for calendar headers.

use chrono::Weekday;

use crate::error::{CalendarError, Result};

/// BS month names in Devanagari, Baisakh first.
pub const NEPALI_MONTHS: [&str; 12] = [
    "बैशाख", "जेठ", "असार", "साउन", "भदौ", "असोज", "कार्तिक", "मंसिर", "पुष", "माघ", "फागुन", "चैत्र",
];

/// BS month names transliterated into Latin script, Baisakh first.
pub const LATIN_MONTHS: [&str; 12] = [
    "Baisakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Asoj", "Kartik", "Mangsir", "Poush", "Magh",
    "Falgun", "Chaitra",
];

/// Short weekday names in Devanagari, Sunday first.
pub const NEPALI_WEEKDAYS: [&str; 7] = ["आइत", "सोम", "मंगल", "बुध", "बिहि", "शुक्र", "शनि"];

/// Gregorian month names, January first.
pub const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Short English weekday names, Sunday first.
pub const ENGLISH_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Which script header names are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    #[default]
    Nepali,
    English,
}

fn month_index(month: u32) -> Result<usize> {
    match month {
        1..=12 => Ok(month as usize - 1),
        _ => Err(CalendarError::InvalidMonth { month }),
    }
}

/// Devanagari name of a BS month.
pub fn bs_month_name(month: u32) -> Result<&'static str> {
    Ok(NEPALI_MONTHS[month_index(month)?])
}

/// Name of a BS month in the requested script.
pub fn bs_month_name_in(month: u32, script: Script) -> Result<&'static str> {
    let idx = month_index(month)?;
    Ok(match script {
        Script::Nepali => NEPALI_MONTHS[idx],
        Script::English => LATIN_MONTHS[idx],
    })
}

/// English name of a Gregorian month.
pub fn ad_month_name(month: u32) -> Result<&'static str> {
    Ok(ENGLISH_MONTHS[month_index(month)?])
}

/// Weekday name in the requested script.
pub fn weekday_name(weekday: Weekday, script: Script) -> &'static str {
    weekday_names(script)[weekday.num_days_from_sunday() as usize]
}

/// All seven weekday names, Sunday first, matching grid columns.
pub fn weekday_names(script: Script) -> &'static [&'static str; 7] {
    match script {
        Script::Nepali => &NEPALI_WEEKDAYS,
        Script::English => &ENGLISH_WEEKDAYS,
    }
}

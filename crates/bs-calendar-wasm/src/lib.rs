//! WASM bindings for bs-calendar.
//!
//! Exposes BS <-> AD conversion, formatting, month grids, and month navigation
//! to the browser via `wasm-bindgen`. Dates cross the boundary as
//! `"YYYY/MM/DD"` strings and structured values as JSON strings. Export names
//! are camelCase so existing page scripts can call them directly.
//!
//! Each export is a thin wrapper over a `*_json`/plain Rust function that
//! returns `Result<_, String>`, so the logic can be exercised natively.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p bs-calendar-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg/ \
//!   target/wasm32-unknown-unknown/release/bs_calendar_wasm.wasm
//! ```

use bs_calendar::names::{ENGLISH_MONTHS, NEPALI_MONTHS, NEPALI_WEEKDAYS};
use bs_calendar::{BsDate, MonthGrid, YearMonth};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GridCellDto {
    bs_year: i32,
    bs_month: u32,
    bs_day: u32,
    bs_date: String,
    ad_date: String,
}

#[derive(Serialize)]
struct MonthGridDto {
    year: i32,
    month: u32,
    weeks: Vec<Vec<Option<GridCellDto>>>,
}

impl From<&MonthGrid> for MonthGridDto {
    fn from(grid: &MonthGrid) -> Self {
        let weeks = grid
            .weeks()
            .iter()
            .map(|week| {
                week.iter()
                    .map(|cell| {
                        cell.map(|c| GridCellDto {
                            bs_year: c.bs.year(),
                            bs_month: c.bs.month(),
                            bs_day: c.bs.day(),
                            bs_date: c.bs.to_string(),
                            ad_date: bs_calendar::format_ad(c.ad),
                        })
                    })
                    .collect()
            })
            .collect();
        Self {
            year: grid.year,
            month: grid.month,
            weeks,
        }
    }
}

#[derive(Serialize)]
struct YearMonthDto {
    year: i32,
    month: u32,
}

#[derive(Serialize)]
struct KeyRangeDto {
    start: String,
    end: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NamesDto {
    nepali_months: &'static [&'static str],
    nepali_days: &'static [&'static str],
    english_months: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Native implementations
// ---------------------------------------------------------------------------

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

/// Today's BS date as `"YYYY/MM/DD"`.
pub fn today_bs_string() -> Result<String, String> {
    bs_calendar::today()
        .map(|d| d.to_string())
        .map_err(|e| e.to_string())
}

/// BS triple to AD `"YYYY/MM/DD"`.
pub fn bs_to_ad_string(year: i32, month: u32, day: u32) -> Result<String, String> {
    bs_calendar::bs_to_ad(year, month, day)
        .map(bs_calendar::format_ad)
        .map_err(|e| e.to_string())
}

/// AD text (`YYYY-MM-DD` or `YYYY/MM/DD`) to a `{year, month, day}` JSON object.
pub fn ad_to_bs_json(ad: &str) -> Result<String, String> {
    let date = bs_calendar::parse_ad(ad).map_err(|e| e.to_string())?;
    let bs: BsDate = bs_calendar::ad_to_bs(date).map_err(|e| e.to_string())?;
    to_json(&bs)
}

/// Normalize AD text to `"YYYY/MM/DD"`.
pub fn format_ad_string(ad: &str) -> Result<String, String> {
    bs_calendar::parse_ad(ad)
        .map(bs_calendar::format_ad)
        .map_err(|e| e.to_string())
}

pub fn supported_years_json() -> Result<String, String> {
    to_json(&bs_calendar::supported_years())
}

pub fn month_grid_json(year: i32, month: u32) -> Result<String, String> {
    let grid = bs_calendar::month_grid(year, month).map_err(|e| e.to_string())?;
    to_json(&MonthGridDto::from(&grid))
}

/// Step `direction` months from (year, month); fails at the table edges.
pub fn navigate_month_json(year: i32, month: u32, direction: i32) -> Result<String, String> {
    let target = YearMonth::new(year, month)
        .and_then(|ym| ym.offset(direction))
        .map_err(|e| e.to_string())?;
    to_json(&YearMonthDto {
        year: target.year(),
        month: target.month(),
    })
}

pub fn month_key_range_json(year: i32, month: u32) -> Result<String, String> {
    let (start, end) = YearMonth::new(year, month)
        .and_then(|ym| ym.key_range())
        .map_err(|e| e.to_string())?;
    to_json(&KeyRangeDto { start, end })
}

pub fn calendar_names_json() -> Result<String, String> {
    to_json(&NamesDto {
        nepali_months: &NEPALI_MONTHS,
        nepali_days: &NEPALI_WEEKDAYS,
        english_months: &ENGLISH_MONTHS,
    })
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

fn js_err(message: String) -> JsValue {
    JsValue::from_str(&message)
}

/// Today's date in BS as `"YYYY/MM/DD"`.
#[wasm_bindgen(js_name = "todayBS")]
pub fn today_bs() -> Result<String, JsValue> {
    today_bs_string().map_err(js_err)
}

/// Today's date in AD as `"YYYY/MM/DD"`.
#[wasm_bindgen(js_name = "todayAD")]
pub fn today_ad() -> String {
    bs_calendar::format_ad(bs_calendar::today_ad())
}

/// Convert a BS date to AD, returned as `"YYYY/MM/DD"`.
#[wasm_bindgen(js_name = "bsToAD")]
pub fn bs_to_ad(year: i32, month: u32, day: u32) -> Result<String, JsValue> {
    bs_to_ad_string(year, month, day).map_err(js_err)
}

/// Convert an AD date string to a JSON `{year, month, day}` BS object.
#[wasm_bindgen(js_name = "adToBS")]
pub fn ad_to_bs(ad: &str) -> Result<String, JsValue> {
    ad_to_bs_json(ad).map_err(js_err)
}

/// Zero-padded `"YYYY/MM/DD"`; does not validate.
#[wasm_bindgen(js_name = "formatBS")]
pub fn format_bs(year: i32, month: u32, day: u32) -> String {
    bs_calendar::format_bs(year, month, day)
}

#[wasm_bindgen(js_name = "formatAD")]
pub fn format_ad(ad: &str) -> Result<String, JsValue> {
    format_ad_string(ad).map_err(js_err)
}

#[wasm_bindgen(js_name = "daysInMonth")]
pub fn days_in_month(year: i32, month: u32) -> Result<u32, JsValue> {
    bs_calendar::days_in_month(year, month).map_err(|e| js_err(e.to_string()))
}

#[wasm_bindgen(js_name = "daysInYear")]
pub fn days_in_year(year: i32) -> Result<u32, JsValue> {
    bs_calendar::days_in_year(year).map_err(|e| js_err(e.to_string()))
}

/// JSON array of supported BS years, ascending.
#[wasm_bindgen(js_name = "supportedYears")]
pub fn supported_years() -> Result<String, JsValue> {
    supported_years_json().map_err(js_err)
}

/// JSON `{year, month, weeks}` where each week holds 7 cells, `null` for padding.
#[wasm_bindgen(js_name = "monthGrid")]
pub fn month_grid(year: i32, month: u32) -> Result<String, JsValue> {
    month_grid_json(year, month).map_err(js_err)
}

/// JSON `{year, month}` after stepping `direction` months.
#[wasm_bindgen(js_name = "navigateMonth")]
pub fn navigate_month(year: i32, month: u32, direction: i32) -> Result<String, JsValue> {
    navigate_month_json(year, month, direction).map_err(js_err)
}

/// JSON `{start, end}` record keys bounding a BS month.
#[wasm_bindgen(js_name = "monthKeyRange")]
pub fn month_key_range(year: i32, month: u32) -> Result<String, JsValue> {
    month_key_range_json(year, month).map_err(js_err)
}

/// JSON `{nepaliMonths, nepaliDays, englishMonths}` for headers and selectors.
#[wasm_bindgen(js_name = "calendarNames")]
pub fn calendar_names() -> Result<String, JsValue> {
    calendar_names_json().map_err(js_err)
}

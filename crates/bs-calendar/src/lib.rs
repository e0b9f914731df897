//! # bs-calendar
//!
//! Table-driven conversion between the Bikram Sambat (BS) calendar used in
//! Nepal and the Gregorian (AD) calendar, plus weekday-aligned month grids.
//!
//! BS month lengths vary year to year and follow no closed-form rule, so the
//! engine is driven entirely by a per-year reference table. Dates outside the
//! table are errors, never approximations.
//!
//! ## Quick start
//!
//! ```rust
//! use bs_calendar::{ad_to_bs, bs_to_ad, format_bs, month_grid};
//! use chrono::NaiveDate;
//!
//! let ad = bs_to_ad(2082, 1, 1).unwrap();
//! assert_eq!(ad, NaiveDate::from_ymd_opt(2025, 4, 14).unwrap());
//!
//! let bs = ad_to_bs(ad).unwrap();
//! assert_eq!(bs.to_string(), "2082/01/01");
//! assert_eq!(format_bs(2082, 1, 1), "2082/01/01");
//!
//! // 2025-04-14 is a Monday, so day 1 lands in column 1.
//! let grid = month_grid(2082, 1).unwrap();
//! assert_eq!(grid.first_column(), Some(1));
//! ```
//!
//! ## Modules
//!
//! - [`table`] — reference table, `days_in_month`, `days_in_year`, `supported_years`
//! - [`convert`] — anchor, BS → AD, AD → BS, `today`
//! - [`format`] — `"YYYY/MM/DD"` formatting and parsing
//! - [`grid`] — Sunday-first month grids
//! - [`month`] — `YearMonth` navigation and record key ranges
//! - [`names`] — month and weekday names
//! - [`error`] — error types

pub mod convert;
pub mod date;
pub mod error;
pub mod format;
pub mod grid;
pub mod month;
pub mod names;
pub mod table;

pub use convert::{ad_to_bs, anchor_ad, anchor_bs, bs_to_ad, today, today_ad};
pub use date::BsDate;
pub use error::CalendarError;
pub use format::{format_ad, format_bs, parse_ad, parse_bs};
pub use grid::{month_grid, GridCell, MonthGrid, Week};
pub use month::YearMonth;
pub use names::Script;
pub use table::{days_in_month, days_in_year, is_supported_year, supported_range, supported_years};

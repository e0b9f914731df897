//! Text and JSON rendering of month grids.

use std::fmt::Write;

use anyhow::Result;
use bs_calendar::names::{ad_month_name, bs_month_name_in, weekday_names};
use bs_calendar::{format_ad, MonthGrid, Script};
use chrono::Datelike;
use serde::Serialize;

#[derive(Serialize)]
pub struct CellDto {
    day: u32,
    bs: String,
    ad: String,
}

#[derive(Serialize)]
pub struct GridDto {
    year: i32,
    month: u32,
    weeks: Vec<Vec<Option<CellDto>>>,
}

impl From<&MonthGrid> for GridDto {
    fn from(grid: &MonthGrid) -> Self {
        Self {
            year: grid.year,
            month: grid.month,
            weeks: grid
                .weeks()
                .iter()
                .map(|week| {
                    week.iter()
                        .map(|cell| {
                            cell.map(|c| CellDto {
                                day: c.bs.day(),
                                bs: c.bs.to_string(),
                                ad: format_ad(c.ad),
                            })
                        })
                        .collect()
                })
                .collect(),
        }
    }
}

/// Render a grid like `cal(1)`: a title line, a weekday header, then one line
/// per week with the BS day right-aligned in 4-wide columns.
pub fn month_text(grid: &MonthGrid, script: Script) -> Result<String> {
    let mut out = String::new();

    let month_name = bs_month_name_in(grid.month, script)?;
    let ad_span = match (grid.days().next(), grid.days().last()) {
        (Some(first), Some(last)) if first.ad.month() == last.ad.month() => format!(
            "{} {}",
            ad_month_name(first.ad.month())?,
            first.ad.year()
        ),
        (Some(first), Some(last)) => format!(
            "{} {} - {} {}",
            ad_month_name(first.ad.month())?,
            first.ad.year(),
            ad_month_name(last.ad.month())?,
            last.ad.year()
        ),
        _ => String::new(),
    };
    writeln!(out, "{} {}  ({})", month_name, grid.year, ad_span)?;

    let header: Vec<String> = weekday_names(script)
        .iter()
        .map(|name| format!("{:>4}", name))
        .collect();
    writeln!(out, "{}", header.join(""))?;

    for week in grid.weeks() {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                Some(c) => format!("{:>4}", c.bs.day()),
                None => "    ".to_string(),
            })
            .collect();
        writeln!(out, "{}", line.trim_end())?;
    }

    Ok(out)
}

//! `bsdate` CLI — convert between Bikram Sambat and Gregorian dates and print
//! month calendars from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Today's date in both calendars
//! bsdate today
//!
//! # BS -> AD and AD -> BS
//! bsdate to-ad 2082/01/01
//! bsdate to-bs 2025-04-14
//!
//! # Month calendar (defaults to the current BS month)
//! bsdate month --year 2082 --month 1 --names english
//!
//! # Supported years and a month's record key range
//! bsdate years
//! bsdate range 2082 9
//!
//! # Machine-readable output
//! bsdate --json to-ad 2082/02/32
//! ```

mod logging;
mod render;

use anyhow::{Context, Result};
use bs_calendar::{BsDate, Script, YearMonth};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "bsdate",
    version,
    about = "Bikram Sambat <-> Gregorian date conversion"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Script for month and weekday names
    #[arg(long, value_enum, env = "BSDATE_NAMES", default_value_t = Names::Nepali, global = true)]
    names: Names,
}

#[derive(Clone, Copy, ValueEnum)]
enum Names {
    Nepali,
    English,
}

impl From<Names> for Script {
    fn from(names: Names) -> Self {
        match names {
            Names::Nepali => Script::Nepali,
            Names::English => Script::English,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's date in BS and AD (the default)
    Today,
    /// Convert a BS date (YYYY/MM/DD) to AD
    ToAd {
        /// BS date, e.g. 2082/01/01
        date: String,
    },
    /// Convert an AD date (YYYY-MM-DD or YYYY/MM/DD) to BS
    ToBs {
        /// AD date, e.g. 2025-04-14
        date: String,
    },
    /// Print a month calendar
    Month {
        /// BS year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
        /// BS month 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// List supported BS years and their lengths
    Years,
    /// Print the first and last record keys of a BS month
    Range {
        /// BS year
        year: i32,
        /// BS month 1-12
        month: u32,
    },
}

#[derive(Serialize)]
struct DatePair {
    bs: String,
    ad: String,
    weekday: String,
}

impl DatePair {
    fn new(bs: BsDate, ad: chrono::NaiveDate, script: Script) -> Self {
        use chrono::Datelike;
        Self {
            bs: bs.to_string(),
            ad: bs_calendar::format_ad(ad),
            weekday: bs_calendar::names::weekday_name(ad.weekday(), script).to_string(),
        }
    }
}

#[derive(Serialize)]
struct YearInfo {
    year: i32,
    days: u32,
}

#[derive(Serialize)]
struct KeyRange {
    start: String,
    end: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let script = Script::from(cli.names);
    let command = cli.command.unwrap_or(Commands::Today);

    match command {
        Commands::Today => {
            let ad = bs_calendar::today_ad();
            let bs = bs_calendar::ad_to_bs(ad)
                .with_context(|| format!("Today ({}) is outside the BS table", ad))?;
            info!(%bs, %ad, "today");
            emit(cli.json, &DatePair::new(bs, ad, script), |p| {
                format!("BS {}  AD {}  ({})", p.bs, p.ad, p.weekday)
            })?;
        }
        Commands::ToAd { date } => {
            let bs: BsDate = date
                .parse()
                .with_context(|| format!("Invalid BS date: {}", date))?;
            let ad = bs.to_ad().with_context(|| format!("Failed to convert {}", bs))?;
            emit(cli.json, &DatePair::new(bs, ad, script), |p| p.ad.clone())?;
        }
        Commands::ToBs { date } => {
            let ad = bs_calendar::parse_ad(&date)
                .with_context(|| format!("Invalid AD date: {}", date))?;
            let bs = bs_calendar::ad_to_bs(ad)
                .with_context(|| format!("Failed to convert {}", date))?;
            emit(cli.json, &DatePair::new(bs, ad, script), |p| p.bs.clone())?;
        }
        Commands::Month { year, month } => {
            let target = resolve_month(year, month)?;
            debug!(%target, "rendering month");
            let grid = target
                .grid()
                .with_context(|| format!("Failed to build calendar for {}", target))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&render::GridDto::from(&grid))?);
            } else {
                print!("{}", render::month_text(&grid, script)?);
            }
        }
        Commands::Years => {
            let years = bs_calendar::supported_years()
                .into_iter()
                .map(|year| -> Result<YearInfo> {
                    Ok(YearInfo {
                        year,
                        days: bs_calendar::days_in_year(year)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            emit(cli.json, &years, |ys| {
                ys.iter()
                    .map(|y| format!("{} {}", y.year, y.days))
                    .collect::<Vec<_>>()
                    .join("\n")
            })?;
        }
        Commands::Range { year, month } => {
            let target = YearMonth::new(year, month)
                .with_context(|| format!("Invalid BS month: {}/{}", year, month))?;
            let (start, end) = target.key_range()?;
            emit(cli.json, &KeyRange { start, end }, |r| {
                format!("{} {}", r.start, r.end)
            })?;
        }
    }

    Ok(())
}

/// Fill in missing year/month from today's BS date.
fn resolve_month(year: Option<i32>, month: Option<u32>) -> Result<YearMonth> {
    let (year, month) = match (year, month) {
        (Some(y), Some(m)) => (y, m),
        _ => {
            let current = YearMonth::current().context("Today is outside the BS table")?;
            (
                year.unwrap_or(current.year()),
                month.unwrap_or(current.month()),
            )
        }
    };
    YearMonth::new(year, month).with_context(|| format!("Invalid BS month: {}/{}", year, month))
}

/// Print `value` as pretty JSON or through the text formatter.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text(value));
    }
    Ok(())
}

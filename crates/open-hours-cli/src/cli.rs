//! Command-line arguments and query-instant resolution.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, ValueEnum};
use open_hours::week::HOUR_SECONDS;
use open_hours::{parse_clock_time, QueryInstant};

/// Log filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Parser, Debug)]
#[command(
    name = "open-hours",
    version,
    about = "List the businesses open at a point of the week"
)]
pub struct Cli {
    /// Schedule file: {"restaurants": [{"name": ..., "opening_hours": ...}]}
    #[arg(short, long, env = "OPEN_HOURS_DATA")]
    pub data: PathBuf,

    /// Local date-time to query, e.g. 2021-05-10T08:30 (defaults to now)
    #[arg(long, conflicts_with_all = ["day", "time"])]
    pub at: Option<String>,

    /// Day of the week to query
    #[arg(long, value_enum, requires = "time")]
    pub day: Option<Day>,

    /// 12-hour time to query, e.g. "8:30 am"
    #[arg(long, requires = "day")]
    pub time: Option<String>,

    /// IANA timezone used for "now" when no instant is given
    #[arg(long, default_value = "UTC")]
    pub tz: String,

    /// Print JSON instead of one name per line
    #[arg(long)]
    pub json: bool,

    /// Print every business's normalized week intervals instead of querying
    #[arg(long)]
    pub intervals: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// Zero-based index, Monday = 0.
    fn index(self) -> u32 {
        self as u32
    }
}

impl Cli {
    /// Work out which instant to query from `--at`, `--day`/`--time`, or the
    /// current time in `--tz`.
    pub fn query_instant(&self) -> Result<QueryInstant> {
        if let Some(at) = &self.at {
            let dt = parse_local_datetime(at)?;
            return Ok(QueryInstant::from_datetime(&dt));
        }

        match (self.day, &self.time) {
            (Some(day), Some(time)) => {
                let seconds = parse_clock_time(time)
                    .with_context(|| format!("invalid --time '{time}'"))?;
                let instant = QueryInstant::new(
                    day.index(),
                    seconds / HOUR_SECONDS,
                    (seconds % HOUR_SECONDS) / 60,
                )?;
                Ok(instant)
            }
            (None, None) => {
                let tz: Tz = self
                    .tz
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid timezone '{}'", self.tz))?;
                let now = Utc::now().with_timezone(&tz);
                Ok(QueryInstant::from_datetime(&now))
            }
            _ => bail!("--day and --time must be given together"),
        }
    }
}

/// Parse a naive local date-time in one of the accepted layouts.
fn parse_local_datetime(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .with_context(|| format!("invalid --at '{s}', expected YYYY-MM-DDTHH:MM[:SS]"))
}

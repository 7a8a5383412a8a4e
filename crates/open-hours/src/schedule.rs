//! Opening-hours normalization.
//!
//! An opening-hours string is a list of clauses separated by `"; "`, each naming a
//! day or day range and an open/close time:
//!
//! ```text
//! Mon-Fri 11:30 am - 9 pm; Sat 10 am - 2 am
//! ```
//!
//! Each clause is tokenized into a [`Clause`] and expanded through
//! [`build_intervals`] into canonical week intervals.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::clock::{parse_clock_time, CLOCK_TOKEN_PATTERN};
use crate::error::{OpenHoursError, Result};
use crate::interval::{build_intervals, Interval};
use crate::query::{self, QueryInstant};
use crate::source::ScheduleEntry;
use crate::week::day_index;

/// Separator between clauses of one opening-hours string.
pub const CLAUSE_SEPARATOR: &str = "; ";

// ASCII-only case folding, matching `day_index`.
static DAY_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)(mon|tue|wed|thu|fri|sat|sun)").expect("day pattern is valid")
});

static CLOCK_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CLOCK_TOKEN_PATTERN).expect("clock pattern is valid"));

// ── Clause ──────────────────────────────────────────────────────────────────

/// One tokenized clause: a resolved day range and an open/close time.
///
/// A single-day clause has `start_day == end_day`. [`Clause::parse`] is the only
/// constructor, so the day range is always within the week and never reversed.
///
/// ```compile_fail
/// use open_hours::Clause;
///
/// let clause = Clause { start_day: 9, end_day: 9, open: 0, close: 0 };
/// ```
///
/// ```
/// use open_hours::Clause;
///
/// let clause = Clause::parse("mon-fri 9am - 5pm").unwrap();
/// assert_eq!((clause.start_day(), clause.end_day()), (0, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause {
    start_day: u32,
    end_day: u32,
    open: u32,
    close: u32,
}

impl Clause {
    /// Tokenize a single clause such as `"mon-fri 9am - 5pm"`.
    ///
    /// The first day token starts the range and the second (if any) ends it; the
    /// first clock token opens and the second closes. Further tokens are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`OpenHoursError::ScheduleParse`] (with an empty business name) when
    /// the clause has no day, fewer than two times, or a reversed day range.
    pub fn parse(text: &str) -> Result<Self> {
        let clause_error = |reason: String| OpenHoursError::ScheduleParse {
            business: String::new(),
            clause: text.to_string(),
            reason,
        };

        let mut days = DAY_TOKEN.find_iter(text).filter_map(|m| day_index(m.as_str()));
        let start_day = days
            .next()
            .ok_or_else(|| clause_error("no day of the week".to_string()))?;
        let end_day = days.next().unwrap_or(start_day);

        if end_day < start_day {
            let err = OpenHoursError::InvalidDayRange(format!(
                "range ends on day {end_day} before it starts on day {start_day}"
            ));
            return Err(clause_error(err.to_string()));
        }

        let times = CLOCK_TOKEN
            .find_iter(text)
            .take(2)
            .map(|m| parse_clock_time(m.as_str()))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| clause_error(e.to_string()))?;

        let &[open, close] = times.as_slice() else {
            return Err(clause_error(format!(
                "expected an opening and a closing time, found {}",
                times.len()
            )));
        };

        Ok(Self {
            start_day,
            end_day,
            open,
            close,
        })
    }

    /// Zero-based day index (Monday = 0).
    pub fn start_day(&self) -> u32 {
        self.start_day
    }

    /// Zero-based day index, never before [`Clause::start_day`].
    pub fn end_day(&self) -> u32 {
        self.end_day
    }

    /// Opening time in seconds since midnight.
    pub fn open(&self) -> u32 {
        self.open
    }

    /// Closing time in seconds since midnight.
    pub fn close(&self) -> u32 {
        self.close
    }

    /// Expand this clause into canonical week intervals.
    pub fn intervals(&self) -> Vec<Interval> {
        build_intervals(self.start_day, self.end_day, self.open, self.close)
    }
}

// ── Normalization ───────────────────────────────────────────────────────────

/// Normalize one business's opening-hours string into week intervals.
///
/// Blank clauses are skipped, so an empty string yields no intervals (never open).
///
/// # Errors
///
/// Returns [`OpenHoursError::ScheduleParse`] for the first malformed clause. The
/// business name is left empty; [`normalize_set`] fills it in.
///
/// # Examples
///
/// ```
/// use open_hours::schedule::normalize;
/// use open_hours::Interval;
///
/// let intervals = normalize("mon 9am - 5pm").unwrap();
/// assert_eq!(intervals, vec![Interval::new(9 * 3600, 17 * 3600)]);
/// ```
pub fn normalize(opening_hours: &str) -> Result<Vec<Interval>> {
    let mut intervals = Vec::new();
    for text in opening_hours.split(CLAUSE_SEPARATOR) {
        if text.trim().is_empty() {
            continue;
        }
        intervals.extend(Clause::parse(text)?.intervals());
    }
    Ok(intervals)
}

/// Normalize every entry of a schedule source into a [`ScheduleSet`], keeping
/// input order.
///
/// # Errors
///
/// Returns [`OpenHoursError::ScheduleParse`] naming the business and clause of the
/// first malformed entry, or [`OpenHoursError::DuplicateBusiness`] if a name
/// appears twice.
pub fn normalize_set(entries: &[ScheduleEntry]) -> Result<ScheduleSet> {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut businesses = Vec::with_capacity(entries.len());

    for entry in entries {
        if !seen.insert(entry.name.as_str()) {
            return Err(OpenHoursError::DuplicateBusiness(entry.name.clone()));
        }
        let intervals = normalize(&entry.opening_hours).map_err(|e| e.for_business(&entry.name))?;
        businesses.push(BusinessSchedule {
            name: entry.name.clone(),
            intervals,
        });
    }

    Ok(ScheduleSet { businesses })
}

// ── Schedules ───────────────────────────────────────────────────────────────

/// The normalized weekly schedule of one business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessSchedule {
    pub name: String,
    /// Unordered; a business is open if any interval contains the instant.
    pub intervals: Vec<Interval>,
}

impl BusinessSchedule {
    /// Whether any interval contains week second `t`.
    pub fn is_open_at(&self, t: u32) -> bool {
        self.intervals.iter().any(|interval| interval.contains(t))
    }
}

/// All normalized schedules from one source, in input order.
///
/// Immutable once built; share it by reference (or `Arc`) across query threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleSet {
    businesses: Vec<BusinessSchedule>,
}

impl ScheduleSet {
    pub fn businesses(&self) -> &[BusinessSchedule] {
        &self.businesses
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    /// Look up a business by exact name.
    pub fn get(&self, name: &str) -> Option<&BusinessSchedule> {
        self.businesses.iter().find(|b| b.name == name)
    }

    /// Names of the businesses open at `instant`, sorted alphabetically.
    pub fn open_at(&self, instant: QueryInstant) -> Vec<String> {
        query::open_at(self, instant)
    }

    /// Whether the named business is open at `instant`. Unknown names are closed.
    pub fn is_open(&self, name: &str, instant: QueryInstant) -> bool {
        self.get(name)
            .is_some_and(|b| b.is_open_at(instant.week_second()))
    }
}

//! # open-hours
//!
//! Weekly opening-hours normalization and open-at queries.
//!
//! Opening-hours strings like `"Mon-Fri 9 am - 5 pm; Sat 10 am - 2 pm"` are turned
//! into intervals on a fixed week timeline (seconds since Monday 00:00:00), which
//! makes "who is open at this moment?" a plain range check.
//!
//! ## Modules
//!
//! - [`week`]: Timeline constants and the day-name table
//! - [`clock`]: 12-hour clock token → seconds since midnight
//! - [`interval`]: Day range + times → canonical intervals (overnight and week-wrap handling)
//! - [`schedule`]: Opening-hours strings → per-business interval sets
//! - [`query`]: Query instants and open-at lookups
//! - [`source`]: JSON schedule documents
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```
//! use open_hours::{QueryInstant, ScheduleSource};
//!
//! let source = ScheduleSource::from_json_str(
//!     r#"{ "restaurants": [ { "name": "Kayasa Restaurant", "opening_hours": "Mon-Thu 8:30 am - 9 pm" } ] }"#,
//! )
//! .unwrap();
//! let schedules = source.to_schedule_set().unwrap();
//!
//! let monday_morning = QueryInstant::new(0, 8, 30).unwrap();
//! assert_eq!(schedules.open_at(monday_morning), vec!["Kayasa Restaurant"]);
//! ```

pub mod clock;
pub mod error;
pub mod interval;
pub mod query;
pub mod schedule;
pub mod source;
pub mod week;

pub use clock::parse_clock_time;
pub use error::{OpenHoursError, Result};
pub use interval::{build_intervals, Interval};
pub use query::{get_open_businesses, open_at, open_at_second, QueryInstant};
pub use schedule::{normalize, normalize_set, BusinessSchedule, Clause, ScheduleSet};
pub use source::{load_schedule_set, ScheduleEntry, ScheduleSource};
pub use week::{DAY_SECONDS, WEEK_SECONDS};

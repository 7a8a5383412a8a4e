//! The canonical week timeline.
//!
//! A week is a fixed, linear line of seconds starting at Monday 00:00:00 (second 0)
//! and ending just before the next Monday (second [`WEEK_SECONDS`]). Nothing wraps:
//! intervals that would cross Sunday midnight are split by the interval builder.

use chrono::Weekday;

pub const MINUTE_SECONDS: u32 = 60;
pub const HOUR_SECONDS: u32 = MINUTE_SECONDS * 60;
pub const DAY_SECONDS: u32 = HOUR_SECONDS * 24;
pub const WEEK_SECONDS: u32 = DAY_SECONDS * 7;

/// Added to a clock time when its meridiem is `pm`.
pub const PM_OFFSET_SECONDS: u32 = HOUR_SECONDS * 12;

/// Three-letter day names in timeline order; the position is the day index.
pub const DAY_NAMES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Look up the zero-based day index (Monday = 0) for a three-letter day name.
///
/// Matching is case-insensitive. Returns `None` for anything that is not one of
/// [`DAY_NAMES`].
pub fn day_index(name: &str) -> Option<u32> {
    DAY_NAMES
        .iter()
        .position(|day| day.eq_ignore_ascii_case(name))
        .map(|i| i as u32)
}

/// The timeline day index of a chrono weekday.
pub fn weekday_index(weekday: Weekday) -> u32 {
    weekday.num_days_from_monday()
}

/// Render a week second as `"Mon 09:00"`, for diagnostics and interval dumps.
///
/// [`WEEK_SECONDS`] itself, the exclusive end of the timeline, renders as `"Sun 24:00"`.
pub fn format_week_second(t: u32) -> String {
    if t >= WEEK_SECONDS {
        return "Sun 24:00".to_string();
    }
    let day = (t / DAY_SECONDS) as usize;
    let rem = t % DAY_SECONDS;
    let hours = rem / HOUR_SECONDS;
    let minutes = (rem % HOUR_SECONDS) / MINUTE_SECONDS;
    let seconds = rem % MINUTE_SECONDS;

    let mut label = DAY_NAMES[day].to_string();
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    if seconds == 0 {
        format!("{label} {hours:02}:{minutes:02}")
    } else {
        format!("{label} {hours:02}:{minutes:02}:{seconds:02}")
    }
}

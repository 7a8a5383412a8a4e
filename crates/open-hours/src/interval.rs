//! Canonical week intervals.
//!
//! Turns a day range plus an open/close clock time into intervals on the linear
//! week timeline (see [`crate::week`]). Two corrections are applied per day:
//!
//! - **Overnight**: a close time at or before the open time (within one minute)
//!   belongs to the next day, so `"9pm - 1am"` spans midnight.
//! - **Week wrap**: an interval running past the end of Sunday is split. The part
//!   after midnight is re-attached at the start of Monday, and the Sunday part is
//!   clamped to the last second of the week.

use serde::Serialize;

use crate::week::{DAY_SECONDS, MINUTE_SECONDS, WEEK_SECONDS};

/// A span of the week, tested half-open as `start <= t < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Interval {
    /// First second of the week that is inside the interval.
    pub start: u32,
    /// First second of the week that is outside the interval.
    pub end: u32,
}

impl Interval {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether week second `t` falls inside this interval.
    pub fn contains(&self, t: u32) -> bool {
        t >= self.start && t < self.end
    }

    /// Length in seconds.
    pub fn duration(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

/// Build the canonical intervals for every day from `start_day` to `end_day`
/// inclusive, each opening at `start_sec` and closing at `end_sec` (seconds since
/// midnight).
///
/// Day indices use Monday = 0. The caller guarantees `start_day <= end_day <= 6`
/// and that both times are below one day; the schedule normalizer checks this
/// before calling.
///
/// A week-wrapped day yields two intervals, the Monday remainder first.
///
/// # Examples
///
/// ```
/// use open_hours::interval::{build_intervals, Interval};
///
/// // Sunday 11pm to 1am wraps onto Monday morning.
/// let intervals = build_intervals(6, 6, 23 * 3600, 3600);
/// assert_eq!(
///     intervals,
///     vec![Interval::new(0, 3600), Interval::new(6 * 86400 + 23 * 3600, 604_799)]
/// );
/// ```
pub fn build_intervals(start_day: u32, end_day: u32, start_sec: u32, end_sec: u32) -> Vec<Interval> {
    let mut intervals = Vec::with_capacity((end_day.saturating_sub(start_day) + 2) as usize);

    for day in start_day..=end_day {
        let day_offset = day * DAY_SECONDS;
        let start = start_sec + day_offset;
        let mut end = end_sec + day_offset;

        // Compared as `end < start + 60` to stay in unsigned arithmetic.
        if end < start + MINUTE_SECONDS {
            end += DAY_SECONDS;
        }

        if end > WEEK_SECONDS {
            intervals.push(Interval::new(0, end - WEEK_SECONDS));
            end = WEEK_SECONDS - 1;
        }

        intervals.push(Interval::new(start, end));
    }

    intervals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::week::HOUR_SECONDS;

    const H: u32 = HOUR_SECONDS;
    const D: u32 = DAY_SECONDS;

    #[test]
    fn test_single_day_same_day_window() {
        let result = build_intervals(0, 0, 9 * H, 17 * H);
        assert_eq!(result, vec![Interval::new(9 * H, 17 * H)]);
    }

    #[test]
    fn test_overnight_pushes_close_to_next_day() {
        let result = build_intervals(5, 5, 21 * H, H);
        assert_eq!(result, vec![Interval::new(5 * D + 21 * H, 6 * D + H)]);
    }

    #[test]
    fn test_week_wrap_splits_sunday() {
        let result = build_intervals(6, 6, 23 * H, H);
        assert_eq!(
            result,
            vec![Interval::new(0, H), Interval::new(6 * D + 23 * H, WEEK_SECONDS - 1)]
        );
    }

    #[test]
    fn test_day_range_expands_each_day() {
        let result = build_intervals(0, 4, 11 * H, 14 * H);
        assert_eq!(result.len(), 5);
        for (i, interval) in result.iter().enumerate() {
            let i = i as u32;
            assert_eq!(*interval, Interval::new(i * D + 11 * H, i * D + 14 * H));
        }
    }

    #[test]
    fn test_equal_open_and_close_is_a_full_day() {
        let result = build_intervals(2, 2, 0, 0);
        assert_eq!(result, vec![Interval::new(2 * D, 3 * D)]);
    }

    #[test]
    fn test_close_within_a_minute_of_open_is_overnight() {
        let result = build_intervals(0, 0, 9 * H, 9 * H + 30);
        assert_eq!(result, vec![Interval::new(9 * H, D + 9 * H + 30)]);
    }

    #[test]
    fn test_close_one_minute_after_open_is_same_day() {
        let result = build_intervals(0, 0, 9 * H, 9 * H + 60);
        assert_eq!(result, vec![Interval::new(9 * H, 9 * H + 60)]);
    }

    #[test]
    fn test_sunday_closing_at_midnight_does_not_split() {
        // Close lands exactly on WEEK_SECONDS, which is still on the timeline.
        let result = build_intervals(6, 6, 22 * H, 0);
        assert_eq!(result, vec![Interval::new(6 * D + 22 * H, WEEK_SECONDS)]);
    }

    #[test]
    fn test_overnight_range_wraps_only_on_sunday() {
        let result = build_intervals(4, 6, 20 * H, 2 * H);
        assert_eq!(
            result,
            vec![
                Interval::new(4 * D + 20 * H, 5 * D + 2 * H),
                Interval::new(5 * D + 20 * H, 6 * D + 2 * H),
                Interval::new(0, 2 * H),
                Interval::new(6 * D + 20 * H, WEEK_SECONDS - 1),
            ]
        );
    }

    #[test]
    fn test_contains_is_half_open() {
        let interval = Interval::new(9 * H, 17 * H);
        assert!(interval.contains(9 * H));
        assert!(interval.contains(17 * H - 1));
        assert!(!interval.contains(17 * H));
        assert!(!interval.contains(9 * H - 1));
        assert_eq!(interval.duration(), 8 * H);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn intervals_stay_on_the_timeline(
                start_day in 0u32..7,
                span in 0u32..7,
                open_minute in 0u32..1440,
                close in 0u32..DAY_SECONDS,
            ) {
                let open = open_minute * MINUTE_SECONDS;
                let end_day = (start_day + span).min(6);
                for interval in build_intervals(start_day, end_day, open, close) {
                    prop_assert!(interval.start < interval.end);
                    prop_assert!(interval.end <= WEEK_SECONDS);
                }
            }

            #[test]
            fn coverage_matches_window_length(
                start_day in 0u32..7,
                span in 0u32..7,
                open_minute in 0u32..1440,
                close in 0u32..DAY_SECONDS,
            ) {
                let open = open_minute * MINUTE_SECONDS;
                let end_day = (start_day + span).min(6);
                let days = end_day - start_day + 1;
                let window = if close < open + MINUTE_SECONDS {
                    close + DAY_SECONDS - open
                } else {
                    close - open
                };
                let intervals = build_intervals(start_day, end_day, open, close);
                let wrapped = intervals.len() as u32 > days;
                let total: u32 = intervals.iter().map(Interval::duration).sum();
                let expected = days * window - u32::from(wrapped);
                prop_assert_eq!(total, expected);
            }
        }
    }
}

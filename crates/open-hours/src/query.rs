//! Open-at queries against a [`ScheduleSet`].
//!
//! A query instant is a day of the week plus an hour and minute. It maps onto the
//! week timeline as `day × 86400 + hour × 3600 + minute × 60`; seconds are not
//! modeled, so every query lands on the top of its minute.

use chrono::{Datelike, Timelike, Weekday};

use crate::error::{OpenHoursError, Result};
use crate::schedule::ScheduleSet;
use crate::week::{weekday_index, DAY_SECONDS, HOUR_SECONDS, MINUTE_SECONDS, WEEK_SECONDS};

/// A point in the recurring week, at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryInstant {
    weekday: Weekday,
    hour: u32,
    minute: u32,
}

impl QueryInstant {
    /// Build an instant from a zero-based day index (Monday = 0 … Sunday = 6).
    ///
    /// Callers holding a 1-based weekday (Monday = 1) must subtract one first.
    ///
    /// # Errors
    ///
    /// Returns [`OpenHoursError::InvalidQueryInstant`] if the day is above 6, the
    /// hour above 23 or the minute above 59.
    pub fn new(day_index: u32, hour: u32, minute: u32) -> Result<Self> {
        let weekday = match day_index {
            0 => Weekday::Mon,
            1 => Weekday::Tue,
            2 => Weekday::Wed,
            3 => Weekday::Thu,
            4 => Weekday::Fri,
            5 => Weekday::Sat,
            6 => Weekday::Sun,
            _ => {
                return Err(OpenHoursError::InvalidQueryInstant(format!(
                    "day index {day_index} is outside 0..=6"
                )))
            }
        };
        Self::from_weekday(weekday, hour, minute)
    }

    /// Build an instant from a chrono weekday.
    ///
    /// # Errors
    ///
    /// Returns [`OpenHoursError::InvalidQueryInstant`] if the hour is above 23 or
    /// the minute above 59.
    pub fn from_weekday(weekday: Weekday, hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 {
            return Err(OpenHoursError::InvalidQueryInstant(format!(
                "hour {hour} is outside 0..=23"
            )));
        }
        if minute > 59 {
            return Err(OpenHoursError::InvalidQueryInstant(format!(
                "minute {minute} is outside 0..=59"
            )));
        }
        Ok(Self {
            weekday,
            hour,
            minute,
        })
    }

    /// Take the weekday, hour and minute of any chrono date-time.
    ///
    /// chrono's `num_days_from_monday` is already zero-based (Monday = 0), so no
    /// weekday adjustment happens here. Seconds and below are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use open_hours::QueryInstant;
    ///
    /// // 2021-05-10 is a Monday.
    /// let dt = NaiveDate::from_ymd_opt(2021, 5, 10).unwrap().and_hms_opt(8, 30, 45).unwrap();
    /// let instant = QueryInstant::from_datetime(&dt);
    /// assert_eq!(instant.week_second(), 8 * 3600 + 30 * 60);
    /// ```
    pub fn from_datetime<T: Datelike + Timelike>(dt: &T) -> Self {
        Self {
            weekday: dt.weekday(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Position of this instant on the week timeline.
    pub fn week_second(&self) -> u32 {
        weekday_index(self.weekday) * DAY_SECONDS
            + self.hour * HOUR_SECONDS
            + self.minute * MINUTE_SECONDS
    }
}

/// Names of the businesses open at `instant`, sorted alphabetically.
///
/// A business is open when one of its intervals satisfies `start <= t < end`, so
/// a place closing at 9pm is already closed at exactly 9:00pm.
pub fn open_at(schedules: &ScheduleSet, instant: QueryInstant) -> Vec<String> {
    open_names(schedules, instant.week_second())
}

/// Same as [`open_at`]; the name used by callers of the public query API.
pub fn get_open_businesses(schedules: &ScheduleSet, instant: QueryInstant) -> Vec<String> {
    open_at(schedules, instant)
}

/// Names of the businesses open at raw week second `t`, sorted alphabetically.
///
/// # Errors
///
/// Returns [`OpenHoursError::InvalidQueryInstant`] if `t` is not below one week.
pub fn open_at_second(schedules: &ScheduleSet, t: u32) -> Result<Vec<String>> {
    if t >= WEEK_SECONDS {
        return Err(OpenHoursError::InvalidQueryInstant(format!(
            "week second {t} is outside 0..{WEEK_SECONDS}"
        )));
    }
    Ok(open_names(schedules, t))
}

fn open_names(schedules: &ScheduleSet, t: u32) -> Vec<String> {
    let mut names: Vec<String> = schedules
        .businesses()
        .iter()
        .filter(|business| business.is_open_at(t))
        .map(|business| business.name.clone())
        .collect();
    names.sort();
    names
}

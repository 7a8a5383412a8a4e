//! 12-hour clock tokens.
//!
//! Converts tokens like `"8:30 am"`, `"12 pm"` or `"9pm"` into seconds since midnight.
//! Midnight is `"12 am"` (0) and noon is `"12 pm"` (43200).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{OpenHoursError, Result};
use crate::week::{HOUR_SECONDS, MINUTE_SECONDS, PM_OFFSET_SECONDS};

/// Loose clock-token shape, used to find tokens inside a clause.
///
/// Any digit run with `:` groups and a meridiem is taken whole, so a malformed
/// token like `"9:5 am"` reaches [`parse_clock_time`] and fails there instead of
/// matching as `"5 am"`.
pub(crate) const CLOCK_TOKEN_PATTERN: &str = r"(?i)\d+(?::\d+)*\s*[ap]m\b";

static CLOCK_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<hour>1[0-2]|0?[1-9])(?::(?P<minute>[0-5][0-9]))?(?::(?P<second>[0-5][0-9]))?\s*(?P<meridiem>[ap])m$",
    )
    .expect("clock token pattern is valid")
});

/// Parse a single 12-hour clock token into seconds since midnight (0..86400).
///
/// The hour `12` contributes nothing on its own, so `"12 am"` is midnight and the
/// `pm` offset turns `"12 pm"` into noon. An optional seconds field (`"9:15:30 am"`)
/// is accepted and added as-is.
///
/// # Errors
///
/// Returns [`OpenHoursError::InvalidTimeFormat`] if the token does not match
/// `h[:mm[:ss]] am|pm` with `h` in 1..=12.
///
/// # Examples
///
/// ```
/// use open_hours::clock::parse_clock_time;
///
/// assert_eq!(parse_clock_time("8:30 am").unwrap(), 8 * 3600 + 30 * 60);
/// assert_eq!(parse_clock_time("12 pm").unwrap(), 12 * 3600);
/// assert_eq!(parse_clock_time("12 am").unwrap(), 0);
/// ```
pub fn parse_clock_time(token: &str) -> Result<u32> {
    let trimmed = token.trim();
    let caps = CLOCK_TOKEN
        .captures(trimmed)
        .ok_or_else(|| OpenHoursError::InvalidTimeFormat(trimmed.to_string()))?;

    let field = |name: &str| -> Result<u32> {
        caps.name(name)
            .map(|m| m.as_str().parse::<u32>())
            .transpose()
            .map(|v| v.unwrap_or(0))
            .map_err(|_| OpenHoursError::InvalidTimeFormat(trimmed.to_string()))
    };

    let hour = field("hour")?;
    let minute = field("minute")?;
    let second = field("second")?;

    let mut seconds = 0;
    if hour != 12 {
        seconds += hour * HOUR_SECONDS;
    }
    seconds += minute * MINUTE_SECONDS + second;

    let is_pm = caps
        .name("meridiem")
        .is_some_and(|m| m.as_str().eq_ignore_ascii_case("p"));
    if is_pm {
        seconds += PM_OFFSET_SECONDS;
    }

    Ok(seconds)
}

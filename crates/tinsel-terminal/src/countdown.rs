//! Time remaining until the next Christmas at a fixed UTC offset.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc};
use std::fmt;
use thiserror::Error;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;

/// Errors from countdown arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    /// UTC offsets are limited to whole hours in `-23..=23`.
    #[error("UTC offset out of range: {0} hours")]
    InvalidOffset(i32),

    /// Target date falls outside what `chrono` can represent.
    #[error("no Christmas representable after year {0}")]
    OutOfRange(i32),
}

/// Whole days, hours, minutes and seconds left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    /// Full days.
    pub days: i64,
    /// Hours past the full days, `0..24`.
    pub hours: i64,
    /// Minutes past the full hours, `0..60`.
    pub minutes: i64,
    /// Seconds past the full minutes, `0..60`.
    pub seconds: i64,
}

impl Countdown {
    /// Split a non-negative number of seconds.
    #[must_use]
    pub const fn from_seconds(total: i64) -> Self {
        let in_day = total % SECONDS_PER_DAY;
        Self {
            days: total / SECONDS_PER_DAY,
            hours: in_day / SECONDS_PER_HOUR,
            minutes: (in_day % SECONDS_PER_HOUR) / 60,
            seconds: in_day % 60,
        }
    }

    /// Countdown from `now` to 25 December 00:00 at `offset_hours` from UTC.
    ///
    /// Once the local clock reaches midnight on Christmas, the target rolls
    /// over to next year.
    pub fn until_christmas(now: DateTime<Utc>, offset_hours: i32) -> Result<Self, CountdownError> {
        let offset = fixed_offset(offset_hours)?;
        let local = now.with_timezone(&offset);

        let this_year = christmas(&offset, local.year())?;
        let target = if local >= this_year {
            christmas(&offset, local.year() + 1)?
        } else {
            this_year
        };

        Ok(Self::from_seconds((target - local).num_seconds()))
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, {} hours, {} minutes, {} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Validate an hour offset and turn it into a `FixedOffset`.
pub fn fixed_offset(offset_hours: i32) -> Result<FixedOffset, CountdownError> {
    if !(-23..=23).contains(&offset_hours) {
        return Err(CountdownError::InvalidOffset(offset_hours));
    }
    FixedOffset::east_opt(offset_hours * 3600).ok_or(CountdownError::InvalidOffset(offset_hours))
}

fn christmas(offset: &FixedOffset, year: i32) -> Result<DateTime<FixedOffset>, CountdownError> {
    offset
        .with_ymd_and_hms(year, 12, 25, 0, 0, 0)
        .single()
        .ok_or(CountdownError::OutOfRange(year))
}

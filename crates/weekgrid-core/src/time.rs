//! Time-of-day values for class sessions.
//!
//! A [`TimeOfDay`] is a wall-clock time within a single day with minute
//! resolution. Values are totally ordered, which is what the layout sweep
//! relies on when sorting session boundaries.

use std::fmt;

use crate::error::IntervalError;

const MINUTES_PER_HOUR: u16 = 60;

/// A validated time of day between `0:00` and `23:59`.
///
/// # Examples
///
/// ```
/// # use weekgrid_core::time::TimeOfDay;
/// let start = TimeOfDay::new(9, 30).unwrap();
/// let finish = TimeOfDay::new(10, 0).unwrap();
///
/// assert!(start < finish);
/// assert_eq!(start.to_string(), "9:30");
/// assert_eq!(start.as_hours(), 9.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Creates a time from an hour in `0..24` and a minute in `0..60`.
    ///
    /// Signed arguments are accepted so raw scraped values can be passed
    /// through unchanged and rejected here.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::HourOutOfRange`] or
    /// [`IntervalError::MinuteOutOfRange`] when a component is out of domain.
    pub fn new(hour: i64, minute: i64) -> Result<Self, IntervalError> {
        if !(0..24).contains(&hour) {
            return Err(IntervalError::HourOutOfRange(hour));
        }
        if !(0..60).contains(&minute) {
            return Err(IntervalError::MinuteOutOfRange(minute));
        }

        // Both components are range-checked above, so the product fits in u16.
        let minutes = hour as u16 * MINUTES_PER_HOUR + minute as u16;
        Ok(Self { minutes })
    }

    /// Returns the hour component.
    pub fn hour(self) -> u8 {
        (self.minutes / MINUTES_PER_HOUR) as u8
    }

    /// Returns the minute component.
    pub fn minute(self) -> u8 {
        (self.minutes % MINUTES_PER_HOUR) as u8
    }

    /// Returns the number of minutes elapsed since midnight.
    pub fn minutes_since_midnight(self) -> u16 {
        self.minutes
    }

    /// Returns the time as fractional hours, e.g. `9:45` is `9.75`.
    ///
    /// Renderers use this for the linear time-to-pixel scale.
    pub fn as_hours(self) -> f32 {
        f32::from(self.minutes) / f32::from(MINUTES_PER_HOUR)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour(), self.minute())
    }
}

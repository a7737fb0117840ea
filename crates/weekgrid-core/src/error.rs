//! Validation errors for timetable input.
//!
//! Every constructor in this crate that accepts raw values returns a
//! [`SessionError`] when the input falls outside its domain. Nothing is
//! clamped or corrected on the caller's behalf.

use thiserror::Error;

use crate::time::TimeOfDay;

/// Reasons a session's time interval is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("hour {0} is outside 0-23")]
    HourOutOfRange(i64),

    #[error("minute {0} is outside 0-59")]
    MinuteOutOfRange(i64),

    #[error("start {start} is not before finish {finish}")]
    NotIncreasing { start: TimeOfDay, finish: TimeOfDay },
}

/// An error raised while validating a session or one of its parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid interval: {0}")]
    InvalidInterval(#[from] IntervalError),

    #[error("invalid weekday `{0}`, expected Monday through Sunday")]
    InvalidWeekday(String),

    #[error("malformed class code `{0}`")]
    InvalidClassCode(String),
}

impl SessionError {
    /// Returns `true` for [`SessionError::InvalidInterval`].
    pub fn is_invalid_interval(&self) -> bool {
        matches!(self, Self::InvalidInterval(_))
    }

    /// Returns `true` for [`SessionError::InvalidWeekday`].
    pub fn is_invalid_weekday(&self) -> bool {
        matches!(self, Self::InvalidWeekday(_))
    }
}

//! The seven scheduling days.

use std::{fmt, str::FromStr};

use crate::error::SessionError;

/// A day of the week, Monday first.
///
/// Sessions are grouped and laid out independently per weekday, and the
/// zero-based [`index`](Weekday::index) doubles as the horizontal day slot
/// when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the weekday for a zero-based index, Monday being `0`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidWeekday`] if `index` is not in `0..7`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use weekgrid_core::weekday::Weekday;
    /// assert_eq!(Weekday::from_index(2).unwrap(), Weekday::Wednesday);
    /// assert!(Weekday::from_index(7).is_err());
    /// ```
    pub fn from_index(index: i64) -> Result<Self, SessionError> {
        usize::try_from(index)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| SessionError::InvalidWeekday(index.to_string()))
    }

    /// Returns the zero-based index of this weekday, Monday being `0`.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the capitalized English name of this weekday.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl FromStr for Weekday {
    type Err = SessionError;

    /// Parses a full English weekday name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SessionError::InvalidWeekday(s.to_string()))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

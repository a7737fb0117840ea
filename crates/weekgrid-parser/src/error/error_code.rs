//! Error codes for schedule diagnostics.
//!
//! Codes are grouped by what went wrong:
//! - `E1xx` - Row structure errors
//! - `E2xx` - Session validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Row Structure Errors (E1xx)
    // =========================================================================
    /// Wrong number of fields.
    ///
    /// A row must hold exactly a class code, a weekday, a start time and a
    /// finish time.
    E100,

    /// Malformed class code.
    ///
    /// Class codes have six non-empty slash-separated parts, e.g.
    /// `COMP10001/U/1/SM1/L/01`.
    E101,

    // =========================================================================
    // Session Validation Errors (E2xx)
    // =========================================================================
    /// Invalid weekday.
    ///
    /// The weekday is not one of Monday through Sunday.
    E200,

    /// Invalid time of day.
    ///
    /// A time is not of the form `H:MM`, or its hour or minute is out of range.
    E201,

    /// Start not before finish.
    ///
    /// A session must start strictly before it finishes.
    E202,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E201").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "wrong number of fields",
            ErrorCode::E101 => "malformed class code",
            ErrorCode::E200 => "invalid weekday",
            ErrorCode::E201 => "invalid time of day",
            ErrorCode::E202 => "start not before finish",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! # Weekgrid Parser
//!
//! Reads schedule files into validated [`Session`]s. This is the ingestion
//! step in front of the layout engine: every row is checked for a well-formed
//! class code, a recognized weekday and a start time strictly before its
//! finish time. All faults in a file are reported together.
//!
//! ## Usage
//!
//! ```
//! # use weekgrid_parser::{parse, ParseConfig, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "
//!         COMP10001/U/1/SM1/L/01  Monday   9:00  10:00
//!         COMP10001/U/1/SM1/T/03  Monday  9:30  10:30  # tutorial
//!     ";
//!
//!     let sessions = parse(source, &ParseConfig::default())?;
//!     assert_eq!(sessions.len(), 2);
//!     Ok(())
//! }
//! ```

pub mod error;

mod schedule;
mod span;

pub use span::Span;

use weekgrid_core::session::Session;

use error::ParseError;

/// Options controlling which rows of a schedule are kept.
#[derive(Debug, Clone, Default)]
pub struct ParseConfig {
    semester: Option<String>,
}

impl ParseConfig {
    /// Creates a configuration with an optional semester filter.
    pub fn new(semester: Option<String>) -> Self {
        Self { semester }
    }

    /// Keeps only sessions whose class code is in `semester`, ignoring case.
    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = Some(semester.into());
        self
    }

    /// Returns the semester filter, if any.
    pub fn semester(&self) -> Option<&str> {
        self.semester.as_deref()
    }
}

/// Parse schedule source text into sessions.
///
/// Rows filtered out by [`ParseConfig::semester`] are still validated, so a
/// malformed row is never hidden by the filter.
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per malformed field if
/// any row is invalid. No sessions are returned in that case.
pub fn parse(source: &str, config: &ParseConfig) -> Result<Vec<Session>, ParseError> {
    schedule::read_schedule(source, config)
}

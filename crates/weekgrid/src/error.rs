//! Error types for Weekgrid operations.
//!
//! This module provides the main error type [`WeekgridError`] which wraps
//! the error conditions that can occur while turning a schedule into a
//! laid-out week.

use std::{fmt, io};

use thiserror::Error;

use weekgrid_core::error::SessionError;
use weekgrid_parser::error::ParseError;

/// The main error type for Weekgrid operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant contains structured error information with source code
/// spans, ready for rich error reporting. The `InvalidSessions` variant lists
/// every rejected session of a batch handed over as raw data.
#[derive(Debug, Error)]
pub enum WeekgridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("{}", describe_faults(.0))]
    InvalidSessions(Vec<SessionFault>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for WeekgridError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl WeekgridError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

/// A session rejected during validation, identified by its input position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFault {
    index: usize,
    error: SessionError,
}

impl SessionFault {
    pub(crate) fn new(index: usize, error: SessionError) -> Self {
        Self { index, error }
    }

    /// Returns the zero-based position of the session in the input.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns why the session was rejected.
    pub fn error(&self) -> &SessionError {
        &self.error
    }
}

impl fmt::Display for SessionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session {}: {}", self.index, self.error)
    }
}

fn describe_faults(faults: &[SessionFault]) -> String {
    match faults {
        [only] => format!("Invalid session: {only}"),
        [first, rest @ ..] => format!("Invalid session: {first} (+{} more)", rest.len()),
        [] => "Invalid sessions".to_string(),
    }
}

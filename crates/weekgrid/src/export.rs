//! Export functionality for laid-out timetables.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a laid-out week into an output format. It is the final stage in
//! the Weekgrid processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Schedule source
//!     ↓ parse
//! Vec<Session>
//!     ↓ layout
//! WeekLayout
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`text`] - Plain-text listing via [`text::TextExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`WeekgridError::Export`] at the crate
//! boundary.
//!
//! [`WeekgridError::Export`]: crate::WeekgridError::Export

/// Plain-text export backend.
pub mod text;

use crate::layout::WeekLayout;

/// Abstraction for timetable export backends.
///
/// Implementors convert a [`WeekLayout`] into a specific output format.
pub trait Exporter {
    /// Exports a laid-out week to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_week(&mut self, layout: &WeekLayout) -> Result<(), Error>;
}

/// Errors that can occur during timetable export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

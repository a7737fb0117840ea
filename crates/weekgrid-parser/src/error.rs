//! Diagnostics for malformed schedule files.
//!
//! Every fault found while reading a schedule becomes a [`Diagnostic`]: a
//! message with an [`ErrorCode`], labelled byte ranges into the source and
//! optional help. The reader keeps going after a bad row, so a single
//! [`ParseError`] can carry one diagnostic per offending field.
//!
//! # Example
//!
//! ```
//! # use weekgrid_parser::error::{Diagnostic, ErrorCode};
//! # use weekgrid_parser::Span;
//! let diag = Diagnostic::error("start `11:00` is not before finish `10:00`")
//!     .with_code(ErrorCode::E202)
//!     .with_label(Span::new(30..35), "starts here")
//!     .with_secondary_label(Span::new(37..42), "finishes here")
//!     .with_help("swap the two times or fix the source row");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;

//! Error adapter for converting WeekgridError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A [`weekgrid_parser::error::ParseError`] holds one diagnostic per malformed
//! field and a [`WeekgridError::InvalidSessions`] one fault per rejected
//! session. Each of them is rendered independently.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, Severity as MietteSeverity, SourceSpan};

use weekgrid::{SessionFault, WeekgridError};
use weekgrid_parser::error::{Diagnostic, Severity};

/// Adapter for a single schedule diagnostic.
///
/// This adapter wraps a single [`Diagnostic`] and implements
/// [`MietteDiagnostic`] to enable rich error formatting in the CLI.
pub struct DiagnosticAdapter<'a> {
    /// The wrapped diagnostic
    diag: &'a Diagnostic,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        match self.diag.severity() {
            Severity::Error => Some(MietteSeverity::Error),
            Severity::Warning => Some(MietteSeverity::Warning),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = SourceSpan::new(label.span().start().into(), label.span().len());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for one session rejected from a raw batch.
pub struct FaultAdapter<'a>(pub &'a SessionFault);

impl fmt::Debug for FaultAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for FaultAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for FaultAdapter<'_> {}

impl MietteDiagnostic for FaultAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = if self.0.error().is_invalid_weekday() {
            "weekgrid::invalid_weekday"
        } else if self.0.error().is_invalid_interval() {
            "weekgrid::invalid_interval"
        } else {
            "weekgrid::invalid_session"
        };
        Some(Box::new(code))
    }
}

/// Adapter for [`WeekgridError`] variants without per-item detail.
///
/// This adapter handles errors that don't have rich diagnostic information,
/// such as I/O errors, configuration errors and export errors.
pub struct ErrorAdapter<'a>(pub &'a WeekgridError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            WeekgridError::Io(_) => "weekgrid::io",
            WeekgridError::Parse { .. } => return None,
            WeekgridError::InvalidSessions(_) => "weekgrid::invalid_session",
            WeekgridError::Config(_) => "weekgrid::config",
            WeekgridError::Export(_) => "weekgrid::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps a single diagnostic, a single session fault, or a
/// non-diagnostic error, providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A rejected session identified by its input position.
    Fault(FaultAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl Reportable<'_> {
    fn inner(&self) -> &dyn MietteDiagnostic {
        match self {
            Reportable::Diagnostic(d) => d,
            Reportable::Fault(f) => f,
            Reportable::Error(e) => e,
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner().source()
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn severity(&self) -> Option<MietteSeverity> {
        self.inner().severity()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

/// Convert a [`WeekgridError`] into a list of reportable errors.
///
/// For [`WeekgridError::Parse`] this returns one [`Reportable`] per
/// diagnostic and for [`WeekgridError::InvalidSessions`] one per fault. For
/// other error variants, this returns a single [`Reportable`].
pub fn to_reportables(err: &WeekgridError) -> Vec<Reportable<'_>> {
    match err {
        WeekgridError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
            .collect(),
        WeekgridError::InvalidSessions(faults) if !faults.is_empty() => faults
            .iter()
            .map(|fault| Reportable::Fault(FaultAdapter(fault)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use weekgrid::session::SessionSpec;
    use weekgrid_parser::{
        Span,
        error::{ErrorCode, ParseError},
    };

    use super::*;

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error("invalid weekday `Mondy`")
            .with_code(ErrorCode::E200)
            .with_label(Span::new(0..5), "not a weekday")
            .with_help("use a full day name such as `Monday`");
        let err = WeekgridError::new_parse_error(ParseError::from(diag), "Mondy");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "invalid weekday `Mondy`");
                assert_eq!(d.code().unwrap().to_string(), "E200");
                assert_eq!(d.severity(), Some(MietteSeverity::Error));
            }
            _ => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_multiple_diagnostics() {
        let diags = vec![
            Diagnostic::error("first error")
                .with_code(ErrorCode::E100)
                .with_label(Span::new(0..5), "first"),
            Diagnostic::error("second error")
                .with_code(ErrorCode::E201)
                .with_label(Span::new(10..15), "second")
                .with_help("help for second"),
            Diagnostic::warning("a warning").with_label(Span::new(20..25), "third"),
        ];
        let err = WeekgridError::new_parse_error(ParseError::from(diags), "source code here...");

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 3);
        assert_eq!(reportables[0].to_string(), "first error");
        assert_eq!(reportables[1].to_string(), "second error");
        assert_eq!(reportables[2].severity(), Some(MietteSeverity::Warning));
    }

    #[test]
    fn test_session_faults_are_separate() {
        let specs = vec![
            SessionSpec {
                weekday: 7,
                ..SessionSpec::default()
            },
            SessionSpec {
                weekday: 0,
                start: (10, 0),
                finish: (9, 0),
                class: None,
            },
        ];
        let err = weekgrid::layout::layout_specs(specs).unwrap_err();

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 2);
        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "weekgrid::invalid_weekday"
        );
        assert_eq!(
            reportables[1].code().unwrap().to_string(),
            "weekgrid::invalid_interval"
        );
        assert!(reportables[1].to_string().starts_with("session 1:"));
    }

    #[test]
    fn test_non_parse_error() {
        let err = WeekgridError::Config("bad palette".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Configuration error: bad palette");
                assert_eq!(e.code().unwrap().to_string(), "weekgrid::config");
            }
            _ => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_primary_flag_on_labels() {
        let diag = Diagnostic::error("start `10:00` is not before finish `9:00`")
            .with_label(Span::new(0..5), "starts here")
            .with_secondary_label(Span::new(6..10), "finishes here");

        let adapter = DiagnosticAdapter::new(&diag, "10:00 9:00");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("starts here"));
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
    }
}

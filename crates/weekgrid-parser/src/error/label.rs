//! Labelled source spans attached to diagnostics.

use crate::span::Span;

/// A message pinned to a byte range of the schedule source.
///
/// A diagnostic normally has one primary label on the offending field and
/// may add secondary labels on related fields, e.g. the finish time that a
/// start time was compared against.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span of this label.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the message of this label.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Returns `true` if this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

//! Core shared types for Lattice.
//!
//! This crate is intentionally small and dependency-light.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A byte-span into a source string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span({}..{})", self.start, self.end)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A translation diagnostic surfaced to whatever layer drives the frontend.
///
/// The frontend itself never fails; degraded translations are reported here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn error(code: &'static str, message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            span,
        }
    }

    pub fn warning(code: &'static str, message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn span_len_and_empty() {
        let span = Span::new(3, 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::new(5, 5).is_empty());
        // A reversed span is degenerate and reports as empty.
        assert!(Span::new(7, 3).is_empty());
        assert_eq!(Span::new(7, 3).len(), 0);
    }

    #[test]
    fn diagnostic_constructors() {
        let diag = Diagnostic::warning("XLAT_LOSSY", "lossy translation", None);
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.code, "XLAT_LOSSY");

        let diag = Diagnostic::error("XLAT_BAD_TREE", "inconsistent tree", Some(Span::new(1, 4)));
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(format!("{:?}", diag.span.unwrap()), "Span(1..4)");
    }
}

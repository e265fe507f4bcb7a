use lattice_core::{Diagnostic, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationDiagnosticKind {
    /// A node kind with no dedicated translation was rendered as an opaque
    /// expression.
    LossyTranslation,
}

#[derive(Debug, Clone, Copy)]
pub struct TranslationConfig {
    /// Report dispatch fallbacks as diagnostics.
    pub report_lossy: bool,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self { report_lossy: true }
    }
}

pub(crate) fn diagnostic(
    kind: TranslationDiagnosticKind,
    span: Option<Span>,
    message: String,
) -> Diagnostic {
    match kind {
        TranslationDiagnosticKind::LossyTranslation => {
            Diagnostic::warning("XLAT_LOSSY", message, span)
        }
    }
}

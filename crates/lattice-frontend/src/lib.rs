//! Translation of foreign syntax trees into the Lattice expression graph.
//!
//! The frontend is total: every node yields exactly one graph node, and a
//! node kind without a dedicated translation degrades to an opaque
//! expression rather than an error. Degraded translations are reported as
//! diagnostics on the [`TranslationResult`] and as `tracing` events; they
//! never abort a pass.
//!
//! Translation is a single-threaded recursive descent over one subtree.
//! Sibling argument clauses are translated strictly left-to-right, and their
//! ordinal indices and data-flow edges reflect that order; downstream
//! analyses match arguments to parameters by position.

mod diagnostics;
mod text;
mod translate;

pub use diagnostics::{TranslationConfig, TranslationDiagnosticKind};
pub use text::recover_invocation_text;
pub use translate::{Frontend, TranslationResult};

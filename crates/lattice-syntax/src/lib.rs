//! Foreign syntax tree surface for Lattice.
//!
//! The parser for the analyzed source language lives outside this workspace;
//! what it hands us is a rowan tree over the closed [`SyntaxKind`] set. This
//! crate provides:
//! - [`TreeBuilder`]: the ingestion seam through which an external parse (or
//!   a test fixture) is materialized as a syntax tree.
//! - typed AST wrappers ([`ast`]) over the node kinds the frontend consumes.
//!
//! Trees are read-only once built; navigation (including the parent link used
//! for invocation-text recovery) is rowan's non-owning red-tree API.

pub mod ast;
mod syntax_kind;
mod tree;

pub use ast::AstNode;
pub use syntax_kind::{CxxLanguage, SyntaxKind};
pub use tree::{
    raw_text, text_span, SyntaxElement, SyntaxNode, SyntaxToken, TreeBuildError, TreeBuilder,
};

use lattice_core::Span;
use rowan::{GreenNode, GreenNodeBuilder};
use text_size::TextRange;
use thiserror::Error;

use crate::syntax_kind::{CxxLanguage, SyntaxKind};

pub type SyntaxNode = rowan::SyntaxNode<CxxLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<CxxLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<CxxLanguage>;

/// Raw source text covered by a node.
///
/// This is the concatenation of the node's token leaves; a node that carries
/// no tokens yields an empty string. Callers must treat empty as "no usable
/// raw signature".
pub fn raw_text(node: &SyntaxNode) -> String {
    node.text().to_string()
}

/// Byte span of a node within the source buffer the tree was built from.
pub fn text_span(node: &SyntaxNode) -> Span {
    let range: TextRange = node.text_range();
    Span::new(range.start().into(), range.end().into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeBuildError {
    #[error("unbalanced tree: {open} node(s) still open at finish")]
    UnbalancedNodes { open: usize },
    #[error("finish_node called with no open node")]
    NoOpenNode,
    #[error("tree has no root node")]
    MissingRoot,
}

/// Incremental builder for foreign syntax trees.
///
/// The parser that produces these trees is external to this workspace; this
/// builder is the seam through which its output (or a test fixture) is
/// materialized as a [`SyntaxNode`] tree.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    builder: GreenNodeBuilder<'static>,
    depth: usize,
    saw_root: bool,
    unbalanced_finish: bool,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
        self.depth += 1;
        self.saw_root = true;
    }

    pub fn token(&mut self, kind: SyntaxKind, text: &str) {
        self.builder.token(kind.into(), text);
    }

    pub fn finish_node(&mut self) {
        if self.depth == 0 {
            // Recorded and reported from `finish`; rowan would panic here.
            self.unbalanced_finish = true;
            return;
        }
        self.builder.finish_node();
        self.depth -= 1;
    }

    pub fn finish(self) -> Result<SyntaxNode, TreeBuildError> {
        if self.unbalanced_finish {
            return Err(TreeBuildError::NoOpenNode);
        }
        if self.depth != 0 {
            return Err(TreeBuildError::UnbalancedNodes { open: self.depth });
        }
        if !self.saw_root {
            return Err(TreeBuildError::MissingRoot);
        }
        let green: GreenNode = self.builder.finish();
        Ok(SyntaxNode::new_root(green))
    }
}

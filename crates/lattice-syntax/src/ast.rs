use crate::syntax_kind::SyntaxKind;
use crate::tree::SyntaxNode;

pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(syntax: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

pub mod support {
    use crate::ast::AstNode;
    use crate::tree::SyntaxNode;

    pub fn child<N: AstNode>(node: &SyntaxNode) -> Option<N> {
        node.children().find_map(N::cast)
    }
}

/// The parenthesized argument list of a construct call, e.g. `(1, x)`.
///
/// Its raw text deliberately excludes the constructed type; see
/// `lattice-frontend`'s invocation-text recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorInitializer {
    syntax: SyntaxNode,
}

impl AstNode for ConstructorInitializer {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::ConstructorInitializer
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        Self::can_cast(syntax.kind()).then_some(Self { syntax })
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl ConstructorInitializer {
    /// Argument clauses in source order. Clauses are arbitrary expression
    /// nodes, so this yields raw syntax nodes rather than one typed wrapper.
    pub fn arguments(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.syntax.children()
    }
}

/// An `= clause` initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualsInitializer {
    syntax: SyntaxNode,
}

impl AstNode for EqualsInitializer {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::EqualsInitializer
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        Self::can_cast(syntax.kind()).then_some(Self { syntax })
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl EqualsInitializer {
    /// The initializer clause to the right of the `=`, if present.
    pub fn clause(&self) -> Option<SyntaxNode> {
        self.syntax.children().next()
    }
}

/// A brace-enclosed initializer list, `{ a, b }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializerList {
    syntax: SyntaxNode,
}

impl AstNode for InitializerList {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::InitializerList
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        Self::can_cast(syntax.kind()).then_some(Self { syntax })
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl InitializerList {
    pub fn elements(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.syntax.children()
    }
}

/// Any initializer form the frontend dispatches over.
///
/// The variant set is closed; a node whose kind matches none of the variants
/// fails the cast, which is the frontend's fallback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initializer {
    ConstructorInitializer(ConstructorInitializer),
    EqualsInitializer(EqualsInitializer),
    InitializerList(InitializerList),
}

impl AstNode for Initializer {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_initializer()
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let kind = syntax.kind();
        if !Self::can_cast(kind) {
            return None;
        }

        if let Some(it) = ConstructorInitializer::cast(syntax.clone()) {
            return Some(Self::ConstructorInitializer(it));
        }
        if let Some(it) = EqualsInitializer::cast(syntax.clone()) {
            return Some(Self::EqualsInitializer(it));
        }
        if let Some(it) = InitializerList::cast(syntax.clone()) {
            return Some(Self::InitializerList(it));
        }

        None
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::ConstructorInitializer(it) => it.syntax(),
            Self::EqualsInitializer(it) => it.syntax(),
            Self::InitializerList(it) => it.syntax(),
        }
    }
}

/// A `new Type(...)` allocation expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpression {
    syntax: SyntaxNode,
}

impl AstNode for NewExpression {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::NewExpression
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        Self::can_cast(syntax.kind()).then_some(Self { syntax })
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl NewExpression {
    pub fn initializer(&self) -> Option<ConstructorInitializer> {
        support::child::<ConstructorInitializer>(&self.syntax)
    }
}

#[cfg(test)]
mod tests;

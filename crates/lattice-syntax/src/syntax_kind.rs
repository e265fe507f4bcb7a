use rowan::Language;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Unified syntax kind for both tokens and AST nodes of the foreign tree.
///
/// The set is closed but growable: adding a frontend translation for a new
/// construct means adding a kind here and a match arm in the translator, and
/// the compiler checks the rest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize_repr, Deserialize_repr,
)]
#[repr(u16)]
pub enum SyntaxKind {
    // --- Trivia ---
    Whitespace,

    // --- Identifiers & literals ---
    Identifier,
    IntLiteral,
    StringLiteral,

    // --- Keywords ---
    NewKw,

    // --- Operators / punctuation ---
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Eq,
    Plus,
    Minus,
    Star,
    Slash,

    // --- Nodes ---
    /// The parenthesized argument list of a construct call, `(a, b)`.
    ConstructorInitializer,
    /// An `= clause` initializer.
    EqualsInitializer,
    /// A brace-enclosed initializer list, `{ a, b }`.
    InitializerList,
    /// A `new Type(...)` allocation expression.
    NewExpression,
    /// A plain invocation, `callee(args...)`. Includes functional-style
    /// casts, which are syntactically indistinguishable without types.
    CallExpression,
    LiteralExpression,
    ReferenceExpression,

    /// Catch-all for malformed or unrecognized syntax.
    Error,

    // Keep last. Used to validate raw kind conversions.
    #[doc(hidden)]
    __Last,
}

impl SyntaxKind {
    pub fn is_initializer(self) -> bool {
        matches!(
            self,
            SyntaxKind::ConstructorInitializer
                | SyntaxKind::EqualsInitializer
                | SyntaxKind::InitializerList
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(value: SyntaxKind) -> Self {
        rowan::SyntaxKind(value as u16)
    }
}

/// Rowan language marker for the foreign C++-like source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CxxLanguage {}

impl Language for CxxLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> SyntaxKind {
        if raw.0 < SyntaxKind::__Last as u16 {
            // SAFETY: We've verified the numeric value is within the enum range.
            unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
        } else {
            SyntaxKind::Error
        }
    }

    fn kind_to_raw(kind: SyntaxKind) -> rowan::SyntaxKind {
        kind.into()
    }
}

use lattice_core::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExprId(u32);

impl ExprId {
    pub(crate) fn from_raw(raw: u32) -> Self {
        ExprId(raw)
    }

    #[must_use]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena<T> {
    data: Vec<T>,
}

impl<T> Arena<T> {
    pub fn alloc(&mut self, value: T) -> u32 {
        let idx = self.data.len() as u32;
        self.data.push(value);
        idx
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (i as u32, v))
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena { data: Vec::new() }
    }
}

impl<T> std::ops::Index<ExprId> for Arena<T> {
    type Output = T;

    fn index(&self, index: ExprId) -> &Self::Output {
        &self.data[index.idx()]
    }
}

impl<T> std::ops::IndexMut<ExprId> for Arena<T> {
    fn index_mut(&mut self, index: ExprId) -> &mut Self::Output {
        &mut self.data[index.idx()]
    }
}

/// One expression node of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expr {
    pub kind: ExprKind,
    /// Best-available source text for the node. For construct expressions
    /// this is the recovered invocation text, e.g. `Botan(1)`.
    pub code: String,
    pub span: Option<Span>,
    /// 0-based position among sibling arguments, set when the node is bound
    /// as an argument of a construct expression.
    pub argument_index: Option<u32>,
    /// Outgoing data-flow edges. Additive; an edge is never removed.
    pub next_dfg: Vec<ExprId>,
}

impl Expr {
    pub fn new(kind: ExprKind, code: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            kind,
            code: code.into(),
            span,
            argument_index: None,
            next_dfg: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExprKind {
    /// A bare expression carrying no semantic payload beyond its text.
    /// Produced by translation fallbacks.
    Opaque,
    Literal {
        value: String,
    },
    Name {
        name: String,
    },
    InitializerList {
        elements: Vec<ExprId>,
    },
    /// A constructor-style invocation, `Type(args...)` or `new Type(args...)`.
    Construct {
        arguments: Vec<ExprId>,
    },
}

/// The expression graph built by one translation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    exprs: Arena<Expr>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        ExprId::from_raw(self.exprs.alloc(expr))
    }

    #[must_use]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExprId, &Expr)> {
        self.exprs.iter().map(|(raw, expr)| (ExprId::from_raw(raw), expr))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn set_argument_index(&mut self, id: ExprId, index: u32) {
        self.exprs[id].argument_index = Some(index);
    }

    /// Appends `arg` to the construct expression's argument aggregate. The
    /// construct owns the argument from this point on.
    ///
    /// No-op for non-construct targets; the frontend only calls this on
    /// nodes it allocated as constructs.
    pub fn push_argument(&mut self, construct: ExprId, arg: ExprId) {
        if let ExprKind::Construct { arguments } = &mut self.exprs[construct].kind {
            arguments.push(arg);
        }
    }

    /// Records a data-flow edge from `from` into `to` on `from`'s outgoing
    /// edge set.
    pub fn add_dfg(&mut self, from: ExprId, to: ExprId) {
        self.exprs[from].next_dfg.push(to);
    }

    /// Argument aggregate of a construct expression; empty for other kinds.
    #[must_use]
    pub fn arguments(&self, id: ExprId) -> &[ExprId] {
        match &self.exprs[id].kind {
            ExprKind::Construct { arguments } => arguments,
            _ => &[],
        }
    }
}

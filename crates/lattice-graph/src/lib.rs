//! The intermediate expression graph that language frontends translate into.
//!
//! Nodes live in an arena owned by the [`Graph`]; aggregate relations
//! (a construct expression's argument list) and data-flow edges are stored as
//! [`ExprId`] references into that arena. Once a translation pass hands a
//! graph to its caller, the graph is treated as immutable.

mod graph;

pub use graph::{Arena, Expr, ExprId, ExprKind, Graph};

#[cfg(test)]
mod tests;

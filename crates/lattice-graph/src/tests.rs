use crate::{Expr, ExprKind, Graph};
use pretty_assertions::assert_eq;

#[test]
fn argument_binding_is_ordered_and_owned() {
    let mut graph = Graph::new();
    let construct = graph.alloc_expr(Expr::new(
        ExprKind::Construct { arguments: Vec::new() },
        "Botan(1, 2)",
        None,
    ));

    for (i, text) in ["1", "2"].iter().enumerate() {
        let arg = graph.alloc_expr(Expr::new(
            ExprKind::Literal { value: (*text).to_string() },
            *text,
            None,
        ));
        graph.set_argument_index(arg, i as u32);
        graph.push_argument(construct, arg);
        graph.add_dfg(arg, construct);
    }

    let args = graph.arguments(construct);
    assert_eq!(args.len(), 2);
    for (i, &arg) in args.iter().enumerate() {
        assert_eq!(graph.expr(arg).argument_index, Some(i as u32));
        assert_eq!(graph.expr(arg).next_dfg, vec![construct]);
    }
}

#[test]
fn push_argument_ignores_non_construct_targets() {
    let mut graph = Graph::new();
    let opaque = graph.alloc_expr(Expr::new(ExprKind::Opaque, "x", None));
    let arg = graph.alloc_expr(Expr::new(ExprKind::Opaque, "y", None));
    graph.push_argument(opaque, arg);
    assert!(graph.arguments(opaque).is_empty());
}

#[test]
fn iter_walks_nodes_in_allocation_order() {
    let mut graph = Graph::new();
    let a = graph.alloc_expr(Expr::new(ExprKind::Opaque, "a", None));
    let b = graph.alloc_expr(Expr::new(ExprKind::Opaque, "b", None));

    let nodes: Vec<_> = graph.iter().collect();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].0, a);
    assert_eq!(nodes[0].1.code, "a");
    assert_eq!(nodes[1].0, b);
    assert_eq!(nodes[1].1.code, "b");
}

#[test]
fn expr_id_debug_is_compact() {
    let mut graph = Graph::new();
    let id = graph.alloc_expr(Expr::new(ExprKind::Opaque, "", None));
    assert_eq!(format!("{id:?}"), "ExprId(0)");
    assert_eq!(graph.len(), 1);
    assert!(!graph.is_empty());
}

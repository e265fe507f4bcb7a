use crate::ast::{AstNode, ConstructorInitializer, EqualsInitializer, NewExpression};
use crate::{raw_text, text_span, SyntaxKind, SyntaxNode, TreeBuildError, TreeBuilder};
use pretty_assertions::assert_eq;

fn new_botan_one() -> SyntaxNode {
    let mut builder = TreeBuilder::new();
    builder.start_node(SyntaxKind::NewExpression);
    builder.token(SyntaxKind::NewKw, "new");
    builder.token(SyntaxKind::Whitespace, " ");
    builder.token(SyntaxKind::Identifier, "Botan");
    builder.start_node(SyntaxKind::ConstructorInitializer);
    builder.token(SyntaxKind::LParen, "(");
    builder.start_node(SyntaxKind::LiteralExpression);
    builder.token(SyntaxKind::IntLiteral, "1");
    builder.finish_node();
    builder.token(SyntaxKind::RParen, ")");
    builder.finish_node();
    builder.finish_node();
    builder.finish().expect("balanced tree")
}

#[test]
fn typed_casts_smoke() {
    let root = new_botan_one();
    assert_eq!(raw_text(&root), "new Botan(1)");

    let new_expr = NewExpression::cast(root.clone()).expect("NewExpression cast");
    assert!(
        ConstructorInitializer::cast(root).is_none(),
        "root is not a constructor initializer"
    );

    let init = new_expr.initializer().expect("constructor initializer");
    assert_eq!(raw_text(init.syntax()), "(1)");
    assert_eq!(init.arguments().count(), 1);
}

#[test]
fn parent_navigation_recovers_enclosing_text() {
    let root = new_botan_one();
    let init = NewExpression::cast(root)
        .unwrap()
        .initializer()
        .unwrap();

    let parent = init.syntax().parent().expect("parent link");
    assert_eq!(parent.kind(), SyntaxKind::NewExpression);
    assert_eq!(raw_text(&parent), "new Botan(1)");
    assert_eq!(text_span(init.syntax()), lattice_core::Span::new(9, 12));
}

#[test]
fn equals_initializer_clause() {
    let mut builder = TreeBuilder::new();
    builder.start_node(SyntaxKind::EqualsInitializer);
    builder.token(SyntaxKind::Eq, "=");
    builder.token(SyntaxKind::Whitespace, " ");
    builder.start_node(SyntaxKind::LiteralExpression);
    builder.token(SyntaxKind::IntLiteral, "5");
    builder.finish_node();
    builder.finish_node();
    let root = builder.finish().unwrap();

    let init = EqualsInitializer::cast(root).expect("EqualsInitializer cast");
    let clause = init.clause().expect("clause");
    assert_eq!(clause.kind(), SyntaxKind::LiteralExpression);
    assert_eq!(raw_text(&clause), "5");
}

#[test]
fn raw_text_is_empty_for_tokenless_nodes() {
    let mut builder = TreeBuilder::new();
    builder.start_node(SyntaxKind::ConstructorInitializer);
    builder.finish_node();
    let root = builder.finish().unwrap();

    assert_eq!(raw_text(&root), "");
}

#[test]
fn builder_reports_unbalanced_trees() {
    let mut builder = TreeBuilder::new();
    builder.start_node(SyntaxKind::InitializerList);
    assert_eq!(
        builder.finish(),
        Err(TreeBuildError::UnbalancedNodes { open: 1 })
    );

    let mut builder = TreeBuilder::new();
    builder.start_node(SyntaxKind::InitializerList);
    builder.finish_node();
    builder.finish_node();
    assert_eq!(builder.finish(), Err(TreeBuildError::NoOpenNode));

    assert_eq!(TreeBuilder::new().finish(), Err(TreeBuildError::MissingRoot));
}

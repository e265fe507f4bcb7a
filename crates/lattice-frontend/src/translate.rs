use lattice_core::Diagnostic;
use lattice_graph::{Expr, ExprId, ExprKind, Graph};
use lattice_syntax::ast::{
    ConstructorInitializer, EqualsInitializer, Initializer, InitializerList, NewExpression,
};
use lattice_syntax::{raw_text, text_span, AstNode, SyntaxKind, SyntaxNode};

use crate::diagnostics::{diagnostic, TranslationConfig, TranslationDiagnosticKind};
use crate::text::recover_invocation_text;

/// Output of one translation pass: the graph plus any lossy-translation
/// diagnostics collected along the way.
#[derive(Debug)]
pub struct TranslationResult {
    pub graph: Graph,
    pub diagnostics: Vec<Diagnostic>,
}

/// Translates foreign syntax nodes into graph expression nodes.
///
/// One `Frontend` builds one graph; it owns the graph exclusively until
/// [`Frontend::finish`] hands it to the caller.
#[derive(Debug, Default)]
pub struct Frontend {
    graph: Graph,
    diagnostics: Vec<Diagnostic>,
    config: TranslationConfig,
}

impl Frontend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TranslationConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn finish(self) -> TranslationResult {
        TranslationResult {
            graph: self.graph,
            diagnostics: self.diagnostics,
        }
    }

    /// Translates an initializer node of unknown concrete kind.
    ///
    /// Dispatch is a match over the closed [`Initializer`] variant set; the
    /// failed-cast arm is the fallback, so an unrecognized kind degrades to
    /// an opaque expression instead of failing.
    pub fn translate_initializer(&mut self, node: &SyntaxNode) -> ExprId {
        match Initializer::cast(node.clone()) {
            Some(Initializer::ConstructorInitializer(ctor)) => {
                self.translate_constructor_initializer(&ctor)
            }
            Some(Initializer::EqualsInitializer(init)) => {
                self.translate_equals_initializer(&init)
            }
            // Initializer lists recur in ordinary expression positions, so
            // the expression translator owns their semantics.
            Some(Initializer::InitializerList(list)) => self.translate_expression(list.syntax()),
            None => self.fallback_expression(node),
        }
    }

    /// Translates the argument list of a construct call into a construct
    /// expression, binding each argument with its ordinal and a data-flow
    /// edge into the construct.
    fn translate_constructor_initializer(&mut self, ctor: &ConstructorInitializer) -> ExprId {
        let node = ctor.syntax();
        // The node's own text is just the parenthesized list; the constructed
        // type has to be recovered from the enclosing node's text.
        let own_text = raw_text(node);
        let parent_text = node.parent().map(|parent| raw_text(&parent));
        let code = recover_invocation_text(&own_text, parent_text.as_deref());

        let construct = self.graph.alloc_expr(Expr::new(
            ExprKind::Construct {
                arguments: Vec::new(),
            },
            code,
            Some(text_span(node)),
        ));

        for (index, argument) in ctor.arguments().enumerate() {
            let arg = self.translate_expression(&argument);
            self.graph.set_argument_index(arg, index as u32);
            self.graph.push_argument(construct, arg);
            self.graph.add_dfg(arg, construct);
        }

        construct
    }

    /// `= clause` carries no structure of its own: unwrap the clause and
    /// return the expression translator's node unchanged.
    fn translate_equals_initializer(&mut self, init: &EqualsInitializer) -> ExprId {
        match init.clause() {
            Some(clause) => self.translate_expression(&clause),
            // A clause-less equals initializer is malformed input; degrade
            // rather than fail.
            None => self.fallback_expression(init.syntax()),
        }
    }

    /// Translates any expression node. Total: unhandled kinds degrade to an
    /// opaque expression via the fallback.
    pub fn translate_expression(&mut self, node: &SyntaxNode) -> ExprId {
        match node.kind() {
            SyntaxKind::LiteralExpression => {
                let text = raw_text(node);
                self.graph.alloc_expr(Expr::new(
                    ExprKind::Literal { value: text.clone() },
                    text,
                    Some(text_span(node)),
                ))
            }
            SyntaxKind::ReferenceExpression => {
                let text = raw_text(node);
                self.graph.alloc_expr(Expr::new(
                    ExprKind::Name { name: text.clone() },
                    text,
                    Some(text_span(node)),
                ))
            }
            SyntaxKind::InitializerList => match InitializerList::cast(node.clone()) {
                Some(list) => self.translate_initializer_list(&list),
                None => self.fallback_expression(node),
            },
            // `new Type(...)` is carried entirely by its argument list; the
            // construct's text recovery looks back up at this node.
            SyntaxKind::NewExpression => match NewExpression::cast(node.clone())
                .and_then(|new_expr| new_expr.initializer())
            {
                Some(init) => self.translate_initializer(init.syntax()),
                None => self.fallback_expression(node),
            },
            _ => self.fallback_expression(node),
        }
    }

    fn translate_initializer_list(&mut self, list: &InitializerList) -> ExprId {
        let mut elements = Vec::new();
        for element in list.elements() {
            elements.push(self.translate_expression(&element));
        }
        let node = list.syntax();
        let list_expr = self.graph.alloc_expr(Expr::new(
            ExprKind::InitializerList {
                elements: elements.clone(),
            },
            raw_text(node),
            Some(text_span(node)),
        ));
        for element in elements {
            self.graph.add_dfg(element, list_expr);
        }
        list_expr
    }

    /// A bare expression node carrying nothing but the source text. The miss
    /// is a lossy-translation signal, not a failure.
    fn fallback_expression(&mut self, node: &SyntaxNode) -> ExprId {
        tracing::debug!(kind = ?node.kind(), "no translation for node kind, emitting opaque expression");
        if self.config.report_lossy {
            self.diagnostics.push(diagnostic(
                TranslationDiagnosticKind::LossyTranslation,
                Some(text_span(node)),
                format!("no translation for {:?} node", node.kind()),
            ));
        }
        self.graph.alloc_expr(Expr::new(
            ExprKind::Opaque,
            raw_text(node),
            Some(text_span(node)),
        ))
    }
}

// src/lower/mod.rs
//! Lowering of the tree-sitter JavaScript CST into a [`ParseTree`].
//!
//! The target shapes are those of the classic JavaScript engine the depth
//! heuristic was tuned against: calls are `LP` lists headed by the callee,
//! member access is a `DOT` name node over its object, `for(;;)` heads are
//! `RESERVED` ternaries, and so on. Constructs without a counterpart become
//! unknown-kind lists of their named children.

mod expressions;
mod jsx;
mod statements;

use tree_sitter::{Node, Tree};

use crate::error::{Result, ScoreError};
use crate::kind::{NodeKind, RawKind};
use crate::tree::{NodeId, ParseTree, TreeBuilder};

#[cfg(test)]
#[path = "lower_test.rs"]
mod tests;

/// Lowers a parsed CST. `max_nesting` bounds the recursion depth.
///
/// # Errors
/// Returns `NestingTooDeep` when the CST nests deeper than `max_nesting`.
pub fn lower(cst: &Tree, max_nesting: usize) -> Result<ParseTree> {
    let mut lowerer = Lowerer::new(max_nesting);
    let root = lowerer.lower(cst.root_node())?;
    Ok(lowerer.builder.finish(root))
}

struct Lowerer {
    builder: TreeBuilder,
    level: usize,
    max_nesting: usize,
}

impl Lowerer {
    fn new(max_nesting: usize) -> Self {
        Self {
            builder: TreeBuilder::new(),
            level: 0,
            max_nesting,
        }
    }

    fn lower(&mut self, node: Node<'_>) -> Result<Option<NodeId>> {
        if self.level >= self.max_nesting {
            return Err(ScoreError::NestingTooDeep {
                limit: self.max_nesting,
            });
        }
        self.level += 1;
        let result = self.dispatch(node);
        self.level -= 1;
        result
    }

    #[allow(clippy::too_many_lines)]
    fn dispatch(&mut self, node: Node<'_>) -> Result<Option<NodeId>> {
        let id = match node.kind() {
            // Statements
            "program" | "statement_block" | "class_body" => self.block(node)?,
            "expression_statement" => self.expression_statement(node)?,
            "empty_statement" => self.builder.unary(NodeKind::Semi, None),
            "variable_declaration" | "lexical_declaration" | "using_declaration" => {
                self.declaration(node)?
            }
            "variable_declarator" => return self.declarator(node),
            "function_declaration"
            | "function_expression"
            | "generator_function"
            | "generator_function_declaration" => self.function(node)?,
            "arrow_function" => self.arrow_function(node)?,
            "class_declaration" | "class" => self.class(node)?,
            "method_definition" => self.method(node)?,
            "field_definition" => return self.field_definition(node),
            "class_static_block" => return self.field(node, "body"),
            "if_statement" => self.if_statement(node)?,
            "for_statement" => self.for_statement(node)?,
            "for_in_statement" => self.for_in_statement(node)?,
            "while_statement" => self.while_statement(node)?,
            "do_statement" => self.do_statement(node)?,
            "with_statement" => self.with_statement(node)?,
            "switch_statement" => self.switch_statement(node)?,
            "switch_case" => self.switch_case(node)?,
            "switch_default" => self.switch_default(node)?,
            "try_statement" => self.try_statement(node)?,
            "catch_clause" => self.catch_clause(node)?,
            "return_statement" => self.keyword_unary(NodeKind::Return, node)?,
            "throw_statement" => self.keyword_unary(NodeKind::Throw, node)?,
            "break_statement" => self.builder.leaf(NodeKind::Break),
            "continue_statement" => self.builder.leaf(NodeKind::Continue),
            "debugger_statement" => self.builder.leaf(NodeKind::Debugger),
            "labeled_statement" => self.labeled_statement(node)?,
            "import_statement" => self.import_statement(node)?,
            "export_statement" => self.export_statement(node)?,

            // Leaves
            "identifier"
            | "property_identifier"
            | "shorthand_property_identifier"
            | "shorthand_property_identifier_pattern"
            | "private_property_identifier"
            | "statement_identifier"
            | "undefined" => self.builder.name(NodeKind::Name, None),
            "number" => self.builder.leaf(NodeKind::Number),
            "string" => self.builder.leaf(NodeKind::String),
            "regex" => self.builder.leaf(NodeKind::Object),
            "true" | "false" | "null" | "this" | "super" | "meta_property" => {
                self.builder.leaf(NodeKind::Primary)
            }
            "import" => self.builder.leaf(NodeKind::Import),

            // Expressions
            "template_string" => self.template(node)?,
            "parenthesized_expression" => self.parenthesized(node)?,
            "sequence_expression" => self.sequence(node)?,
            "assignment_expression"
            | "augmented_assignment_expression"
            | "assignment_pattern"
            | "object_assignment_pattern" => self.assignment(node)?,
            "ternary_expression" => self.conditional(node)?,
            "binary_expression" => self.binary_expression(node)?,
            "unary_expression" => self.unary_expression(node)?,
            "update_expression" => self.update_expression(node)?,
            "await_expression" | "yield_expression" | "spread_element" | "rest_pattern" => {
                self.keyword_unary(NodeKind::UnaryOp, node)?
            }
            "call_expression" => self.call(node)?,
            "new_expression" => self.new_expression(node)?,
            "member_expression" => self.member(node)?,
            "subscript_expression" => self.subscript(node)?,
            "array" | "array_pattern" => self.list_of(NodeKind::Rb, node)?,
            "object" | "object_pattern" => self.list_of(NodeKind::Rc, node)?,
            "pair" | "pair_pattern" => self.pair(node)?,
            "computed_property_name" | "template_substitution" => return self.first_kid(node),

            // JSX
            "jsx_element" => self.jsx_element(node)?,
            "jsx_opening_element" => self.jsx_tag(NodeKind::XmlStago, node)?,
            "jsx_closing_element" => self.jsx_tag(NodeKind::XmlEtago, node)?,
            "jsx_self_closing_element" => self.jsx_tag(NodeKind::XmlPtagc, node)?,
            "jsx_attribute" => self.jsx_attribute(node)?,
            "jsx_expression" => self.list_of(NodeKind::Lc, node)?,
            "jsx_namespace_name" => self.builder.leaf(NodeKind::XmlName),
            "jsx_text" | "html_character_reference" => self.builder.leaf(NodeKind::XmlText),

            "comment" | "html_comment" | "hash_bang_line" => return Ok(None),
            _ => self.unmapped(node)?,
        };
        Ok(Some(id))
    }

    fn opt(&mut self, node: Option<Node<'_>>) -> Result<Option<NodeId>> {
        match node {
            Some(n) => self.lower(n),
            None => Ok(None),
        }
    }

    fn field(&mut self, node: Node<'_>, name: &str) -> Result<Option<NodeId>> {
        self.opt(node.child_by_field_name(name))
    }

    fn first_kid(&mut self, node: Node<'_>) -> Result<Option<NodeId>> {
        self.opt(named_kids(node).into_iter().next())
    }

    /// Lowers nodes in order, dropping those that lower to nothing.
    fn lower_all<'t>(&mut self, nodes: impl IntoIterator<Item = Node<'t>>) -> Result<Vec<NodeId>> {
        let mut ids = Vec::new();
        for node in nodes {
            if let Some(id) = self.lower(node)? {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    fn list_of(&mut self, kind: NodeKind, node: Node<'_>) -> Result<NodeId> {
        let items = self.lower_all(named_kids(node))?;
        Ok(self.builder.list(kind, &items))
    }

    fn keyword_unary(&mut self, kind: NodeKind, node: Node<'_>) -> Result<NodeId> {
        let kid = self.first_kid(node)?;
        Ok(self.builder.unary(kind, kid))
    }

    fn unmapped(&mut self, node: Node<'_>) -> Result<NodeId> {
        tracing::trace!(kind = node.kind(), "no lowering for syntax node");
        let items = self.lower_all(named_kids(node))?;
        Ok(self.builder.list(RawKind::UNMAPPED, &items))
    }
}

/// Named children, minus comments and other extras.
fn named_kids(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let kids = node
        .named_children(&mut cursor)
        .filter(|kid| !kid.is_extra())
        .collect();
    kids
}

/// Strips one layer of parentheses, as statement conditions carry them.
fn unparenthesize(node: Node<'_>) -> Option<Node<'_>> {
    if node.kind() == "parenthesized_expression" {
        named_kids(node).into_iter().next()
    } else {
        Some(node)
    }
}

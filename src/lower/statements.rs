// src/lower/statements.rs
//! Statements, declarations and function-like constructs.

use tree_sitter::Node;

use super::{named_kids, unparenthesize, Lowerer};
use crate::error::Result;
use crate::kind::NodeKind;
use crate::tree::NodeId;

impl Lowerer {
    pub(super) fn block(&mut self, node: Node<'_>) -> Result<NodeId> {
        self.list_of(NodeKind::Lc, node)
    }

    pub(super) fn expression_statement(&mut self, node: Node<'_>) -> Result<NodeId> {
        let expr = self.first_kid(node)?;
        Ok(self.builder.unary(NodeKind::Semi, expr))
    }

    pub(super) fn declaration(&mut self, node: Node<'_>) -> Result<NodeId> {
        self.list_of(NodeKind::Var, node)
    }

    /// `x = init` becomes a `NAME` holding its initializer; destructuring
    /// becomes an assignment from the initializer to the pattern.
    pub(super) fn declarator(&mut self, node: Node<'_>) -> Result<Option<NodeId>> {
        let Some(target) = node.child_by_field_name("name") else {
            return self.field(node, "value");
        };
        if target.kind() == "identifier" {
            let init = self.field(node, "value")?;
            return Ok(Some(self.builder.name(NodeKind::Name, init)));
        }
        let pattern = self.lower(target)?;
        match self.field(node, "value")? {
            Some(init) => Ok(Some(self.builder.binary(NodeKind::Assign, pattern, Some(init)))),
            None => Ok(pattern),
        }
    }

    /// Only the body is kept; parameters are not part of the tree.
    pub(super) fn function(&mut self, node: Node<'_>) -> Result<NodeId> {
        let body = self.field(node, "body")?;
        Ok(self.builder.func(NodeKind::Function, body))
    }

    pub(super) fn arrow_function(&mut self, node: Node<'_>) -> Result<NodeId> {
        let body = match node.child_by_field_name("body") {
            Some(block) if block.kind() == "statement_block" => self.lower(block)?,
            Some(expr) => {
                let value = self.lower(expr)?;
                Some(self.builder.unary(NodeKind::Return, value))
            }
            None => None,
        };
        Ok(self.builder.func(NodeKind::Function, body))
    }

    pub(super) fn class(&mut self, node: Node<'_>) -> Result<NodeId> {
        let body = self.field(node, "body")?;
        Ok(self.builder.func(NodeKind::Function, body))
    }

    pub(super) fn method(&mut self, node: Node<'_>) -> Result<NodeId> {
        let key = self.field(node, "name")?;
        let body = self.field(node, "body")?;
        let func = self.builder.func(NodeKind::Function, body);
        Ok(self.builder.binary(NodeKind::Colon, key, Some(func)))
    }

    pub(super) fn field_definition(&mut self, node: Node<'_>) -> Result<Option<NodeId>> {
        let key = self.field(node, "property")?;
        match self.field(node, "value")? {
            Some(value) => Ok(Some(self.builder.binary(NodeKind::Colon, key, Some(value)))),
            None => Ok(key),
        }
    }

    fn condition(&mut self, node: Node<'_>, field: &str) -> Result<Option<NodeId>> {
        let inner = node.child_by_field_name(field).and_then(unparenthesize);
        self.opt(inner)
    }

    pub(super) fn if_statement(&mut self, node: Node<'_>) -> Result<NodeId> {
        let cond = self.condition(node, "condition")?;
        let then = self.field(node, "consequence")?;
        let otherwise = match node.child_by_field_name("alternative") {
            Some(clause) => self.first_kid(clause)?,
            None => None,
        };
        Ok(self.builder.ternary(NodeKind::If, cond, then, otherwise))
    }

    /// `for (init; cond; update)` keeps its three header parts in a
    /// `RESERVED` ternary; empty parts stay empty.
    pub(super) fn for_statement(&mut self, node: Node<'_>) -> Result<NodeId> {
        let init = match node.child_by_field_name("initializer") {
            Some(n) if n.is_named() && n.kind() != "empty_statement" => self.lower(n)?,
            _ => None,
        };
        let cond_node = {
            let mut cursor = node.walk();
            let found = node
                .children_by_field_name("condition", &mut cursor)
                .find(|c| c.is_named() && c.kind() != "empty_statement");
            found
        };
        let cond = self.opt(cond_node)?;
        let update = self.field(node, "increment")?;
        let head = self.builder.ternary(NodeKind::Reserved, init, cond, update);
        let body = self.field(node, "body")?;
        Ok(self.builder.binary(NodeKind::For, Some(head), body))
    }

    /// `for (x in o)` and `for (x of o)` both lower to an `IN` head.
    pub(super) fn for_in_statement(&mut self, node: Node<'_>) -> Result<NodeId> {
        let mut target = self.field(node, "left")?;
        if node.child_by_field_name("kind").is_some() {
            let declared: Vec<NodeId> = target.into_iter().collect();
            target = Some(self.builder.list(NodeKind::Var, &declared));
        }
        let object = self.field(node, "right")?;
        let head = self.builder.binary(NodeKind::In, target, object);
        let body = self.field(node, "body")?;
        Ok(self.builder.binary(NodeKind::For, Some(head), body))
    }

    pub(super) fn while_statement(&mut self, node: Node<'_>) -> Result<NodeId> {
        let cond = self.condition(node, "condition")?;
        let body = self.field(node, "body")?;
        Ok(self.builder.binary(NodeKind::While, cond, body))
    }

    pub(super) fn do_statement(&mut self, node: Node<'_>) -> Result<NodeId> {
        let body = self.field(node, "body")?;
        let cond = self.condition(node, "condition")?;
        Ok(self.builder.binary(NodeKind::Do, body, cond))
    }

    pub(super) fn with_statement(&mut self, node: Node<'_>) -> Result<NodeId> {
        let object = self.condition(node, "object")?;
        let body = self.field(node, "body")?;
        Ok(self.builder.binary(NodeKind::With, object, body))
    }

    pub(super) fn switch_statement(&mut self, node: Node<'_>) -> Result<NodeId> {
        let discriminant = self.condition(node, "value")?;
        let cases = match node.child_by_field_name("body") {
            Some(body) => self.lower_all(named_kids(body))?,
            None => Vec::new(),
        };
        let cases = self.builder.list(NodeKind::Lc, &cases);
        Ok(self.builder.binary(NodeKind::Switch, discriminant, Some(cases)))
    }

    pub(super) fn switch_case(&mut self, node: Node<'_>) -> Result<NodeId> {
        let value = self.field(node, "value")?;
        let body = self.case_body(node)?;
        Ok(self.builder.binary(NodeKind::Case, value, Some(body)))
    }

    pub(super) fn switch_default(&mut self, node: Node<'_>) -> Result<NodeId> {
        let body = self.case_body(node)?;
        Ok(self.builder.binary(NodeKind::Default, None, Some(body)))
    }

    fn case_body(&mut self, node: Node<'_>) -> Result<NodeId> {
        let statements: Vec<Node<'_>> = {
            let mut cursor = node.walk();
            let found = node
                .children_by_field_name("body", &mut cursor)
                .filter(|c| !c.is_extra())
                .collect();
            found
        };
        let items = self.lower_all(statements)?;
        Ok(self.builder.list(NodeKind::Lc, &items))
    }

    pub(super) fn try_statement(&mut self, node: Node<'_>) -> Result<NodeId> {
        let block = self.field(node, "body")?;
        let handler = self.field(node, "handler")?;
        let finally = match node.child_by_field_name("finalizer") {
            Some(clause) => self.field(clause, "body")?,
            None => None,
        };
        Ok(self.builder.ternary(NodeKind::Try, block, handler, finally))
    }

    pub(super) fn catch_clause(&mut self, node: Node<'_>) -> Result<NodeId> {
        let param = self.field(node, "parameter")?;
        let body = self.field(node, "body")?;
        Ok(self.builder.ternary(NodeKind::Catch, param, None, body))
    }

    /// The label itself is not a node; the statement hangs off a `COLON`.
    pub(super) fn labeled_statement(&mut self, node: Node<'_>) -> Result<NodeId> {
        let body = self.field(node, "body")?;
        Ok(self.builder.name(NodeKind::Colon, body))
    }

    pub(super) fn import_statement(&mut self, node: Node<'_>) -> Result<NodeId> {
        let mut items = Vec::new();
        for kid in named_kids(node) {
            if kid.kind() == "import_clause" {
                self.import_bindings(kid, &mut items);
            }
        }
        if let Some(source) = self.field(node, "source")? {
            items.push(source);
        }
        Ok(self.builder.list(NodeKind::Import, &items))
    }

    /// One `NAME` per local binding an import introduces.
    fn import_bindings(&mut self, clause: Node<'_>, out: &mut Vec<NodeId>) {
        for kid in named_kids(clause) {
            match kid.kind() {
                "identifier" | "namespace_import" => {
                    out.push(self.builder.name(NodeKind::Name, None));
                }
                "named_imports" => {
                    for spec in named_kids(kid) {
                        if spec.kind() == "import_specifier" {
                            out.push(self.builder.name(NodeKind::Name, None));
                        }
                    }
                }
                _ => {}
            }
        }
    }

    pub(super) fn export_statement(&mut self, node: Node<'_>) -> Result<NodeId> {
        let mut items = Vec::new();
        for kid in named_kids(node) {
            match kid.kind() {
                "export_clause" => {
                    for spec in named_kids(kid) {
                        if spec.kind() == "export_specifier" {
                            items.push(self.builder.name(NodeKind::Name, None));
                        }
                    }
                }
                "namespace_export" => items.push(self.builder.name(NodeKind::Name, None)),
                "decorator" => {}
                _ => {
                    if let Some(id) = self.lower(kid)? {
                        items.push(id);
                    }
                }
            }
        }
        Ok(self.builder.list(NodeKind::Export, &items))
    }
}

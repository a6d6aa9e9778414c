// src/lower/expressions.rs
//! Expressions, literals and patterns.

use tree_sitter::Node;

use super::{named_kids, Lowerer};
use crate::error::Result;
use crate::kind::{NodeKind, RawKind};
use crate::tree::NodeId;

/// Operator token to node kind. `??` groups with `||`, `**` with `*`.
fn binary_kind(operator: &str) -> Option<NodeKind> {
    let kind = match operator {
        "||" | "??" => NodeKind::Or,
        "&&" => NodeKind::And,
        "|" => NodeKind::BitOr,
        "^" => NodeKind::BitXor,
        "&" => NodeKind::BitAnd,
        "==" | "!=" | "===" | "!==" => NodeKind::EqOp,
        "<" | ">" | "<=" | ">=" => NodeKind::RelOp,
        "<<" | ">>" | ">>>" => NodeKind::ShOp,
        "+" => NodeKind::Plus,
        "-" => NodeKind::Minus,
        "*" | "**" => NodeKind::Star,
        "/" | "%" => NodeKind::DivOp,
        "in" => NodeKind::In,
        "instanceof" => NodeKind::InstanceOf,
        _ => return None,
    };
    Some(kind)
}

fn operator(node: Node<'_>) -> &'static str {
    node.child_by_field_name("operator")
        .map_or("", |op| op.kind())
}

fn is_concatenation(node: Node<'_>) -> bool {
    node.kind() == "binary_expression" && operator(node) == "+"
}

impl Lowerer {
    /// `a${b}c` is lowered as the concatenation `"a" + b + "c"`.
    pub(super) fn template(&mut self, node: Node<'_>) -> Result<NodeId> {
        let mut parts = Vec::new();
        let mut pending_text = true;
        let mut substituted = false;
        for kid in named_kids(node) {
            if kid.kind() == "template_substitution" {
                if pending_text {
                    parts.push(self.builder.leaf(NodeKind::String));
                }
                pending_text = false;
                substituted = true;
                if let Some(expr) = self.first_kid(kid)? {
                    parts.push(expr);
                }
            } else {
                pending_text = true;
            }
        }
        if !substituted {
            return Ok(self.builder.leaf(NodeKind::String));
        }
        if pending_text {
            parts.push(self.builder.leaf(NodeKind::String));
        }
        Ok(self.builder.list(NodeKind::Plus, &parts))
    }

    pub(super) fn parenthesized(&mut self, node: Node<'_>) -> Result<NodeId> {
        let inner = self.first_kid(node)?;
        Ok(self.builder.unary(NodeKind::Rp, inner))
    }

    pub(super) fn sequence(&mut self, node: Node<'_>) -> Result<NodeId> {
        let mut operands = Vec::new();
        let mut pending = vec![node];
        while let Some(current) = pending.pop() {
            let kids = named_kids(current);
            for kid in kids.into_iter().rev() {
                if kid.kind() == "sequence_expression" {
                    pending.push(kid);
                } else {
                    operands.push(kid);
                }
            }
        }
        operands.reverse();
        let items = self.lower_all(operands)?;
        Ok(self.builder.list(NodeKind::Comma, &items))
    }

    pub(super) fn assignment(&mut self, node: Node<'_>) -> Result<NodeId> {
        let left = self.field(node, "left")?;
        let right = self.field(node, "right")?;
        Ok(self.builder.binary(NodeKind::Assign, left, right))
    }

    pub(super) fn conditional(&mut self, node: Node<'_>) -> Result<NodeId> {
        let cond = self.field(node, "condition")?;
        let then = self.field(node, "consequence")?;
        let otherwise = self.field(node, "alternative")?;
        Ok(self.builder.ternary(NodeKind::Hook, cond, then, otherwise))
    }

    pub(super) fn binary_expression(&mut self, node: Node<'_>) -> Result<NodeId> {
        let Some(kind) = binary_kind(operator(node)) else {
            let left = self.field(node, "left")?;
            let right = self.field(node, "right")?;
            return Ok(self.builder.binary(RawKind::UNMAPPED, left, right));
        };
        if kind == NodeKind::Plus {
            return self.concatenation(node);
        }
        let left = self.field(node, "left")?;
        let right = self.field(node, "right")?;
        Ok(self.builder.binary(kind, left, right))
    }

    /// Left-nested `+` chains of three or more operands become one `PLUS`
    /// list, so long string-building chains do not nest.
    fn concatenation(&mut self, node: Node<'_>) -> Result<NodeId> {
        let mut operands = Vec::new();
        let mut current = node;
        loop {
            operands.extend(current.child_by_field_name("right"));
            match current.child_by_field_name("left") {
                Some(left) if is_concatenation(left) => current = left,
                left => {
                    operands.extend(left);
                    break;
                }
            }
        }
        operands.reverse();

        if operands.len() <= 2 {
            let left = self.field(node, "left")?;
            let right = self.field(node, "right")?;
            return Ok(self.builder.binary(NodeKind::Plus, left, right));
        }
        let items = self.lower_all(operands)?;
        Ok(self.builder.list(NodeKind::Plus, &items))
    }

    pub(super) fn unary_expression(&mut self, node: Node<'_>) -> Result<NodeId> {
        let kind = if operator(node) == "delete" {
            NodeKind::Delete
        } else {
            NodeKind::UnaryOp
        };
        let operand = self.field(node, "argument")?;
        Ok(self.builder.unary(kind, operand))
    }

    pub(super) fn update_expression(&mut self, node: Node<'_>) -> Result<NodeId> {
        let kind = if operator(node) == "++" {
            NodeKind::Inc
        } else {
            NodeKind::Dec
        };
        let operand = self.field(node, "argument")?;
        Ok(self.builder.unary(kind, operand))
    }

    /// Calls are `LP` lists: the callee first, then the arguments.
    pub(super) fn call(&mut self, node: Node<'_>) -> Result<NodeId> {
        let mut items: Vec<NodeId> = self.field(node, "function")?.into_iter().collect();
        match node.child_by_field_name("arguments") {
            Some(args) if args.kind() == "arguments" => {
                items.extend(self.lower_all(named_kids(args))?);
            }
            Some(tagged) => items.extend(self.lower(tagged)?),
            None => {}
        }
        Ok(self.builder.list(NodeKind::Lp, &items))
    }

    pub(super) fn new_expression(&mut self, node: Node<'_>) -> Result<NodeId> {
        let mut items: Vec<NodeId> = self.field(node, "constructor")?.into_iter().collect();
        if let Some(args) = node.child_by_field_name("arguments") {
            items.extend(self.lower_all(named_kids(args))?);
        }
        Ok(self.builder.list(NodeKind::New, &items))
    }

    /// `o.p` keeps only the object; the property name is not a node.
    pub(super) fn member(&mut self, node: Node<'_>) -> Result<NodeId> {
        let object = self.field(node, "object")?;
        Ok(self.builder.name(NodeKind::Dot, object))
    }

    pub(super) fn subscript(&mut self, node: Node<'_>) -> Result<NodeId> {
        let object = self.field(node, "object")?;
        let index = self.field(node, "index")?;
        Ok(self.builder.binary(NodeKind::Lb, object, index))
    }

    pub(super) fn pair(&mut self, node: Node<'_>) -> Result<NodeId> {
        let key = self.field(node, "key")?;
        let value = self.field(node, "value")?;
        Ok(self.builder.binary(NodeKind::Colon, key, value))
    }
}

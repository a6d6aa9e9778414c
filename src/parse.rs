// src/parse.rs
//! JavaScript parsing through tree-sitter.

use tree_sitter::{Language, Node, Parser, Tree};

use crate::error::{Result, ScoreError};
use crate::lower;
use crate::tree::ParseTree;

pub struct JsParser {
    parser: Parser,
}

impl JsParser {
    /// Creates a parser with the JavaScript grammar loaded.
    ///
    /// # Errors
    /// Returns `ParserUnavailable` if the grammar ABI does not match the runtime.
    pub fn new() -> Result<Self> {
        let language: Language = tree_sitter_javascript::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| ScoreError::ParserUnavailable(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Parses `source` into the concrete syntax tree, rejecting any input
    /// that needed error recovery.
    ///
    /// # Errors
    /// Returns `Parse` with the position of the first error or missing node.
    pub fn parse_cst(&mut self, source: &str) -> Result<Tree> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ScoreError::ParserUnavailable("parser produced no tree".into()))?;

        let root = tree.root_node();
        if root.has_error() {
            let at = first_error(root).unwrap_or(root);
            let pos = at.start_position();
            return Err(ScoreError::Parse {
                line: pos.row + 1,
                column: pos.column + 1,
            });
        }
        Ok(tree)
    }

    /// Parses and lowers `source` into a [`ParseTree`].
    ///
    /// # Errors
    /// Returns `Parse` for invalid input and `NestingTooDeep` when the syntax
    /// nests deeper than `max_nesting`.
    pub fn parse(&mut self, source: &str, max_nesting: usize) -> Result<ParseTree> {
        let cst = self.parse_cst(source)?;
        let tree = lower::lower(&cst, max_nesting)?;
        tracing::debug!(
            bytes = source.len(),
            nodes = tree.len(),
            "lowered JavaScript source"
        );
        Ok(tree)
    }
}

/// Finds the first `ERROR` or `MISSING` node in document order.
///
/// Uses a cursor instead of recursion; error subtrees can be very deep.
fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

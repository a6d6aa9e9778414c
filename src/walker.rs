// src/walker.rs
//! Weighted depth accumulation over a [`ParseTree`].
//!
//! Every visited node adds one unit, transparent nodes give it back, and the
//! kind's weight is added on top regardless of transparency. Children are
//! discovered from the node's arity. The counter belongs to one
//! [`DepthWalker`], so concurrent scores never interfere.

use std::fmt;

use serde::Serialize;

use crate::classify::{is_transparent, weight_adjustment};
use crate::error::{Result, ScoreError};
use crate::tree::{Arity, NodeId, ParseTree};

#[cfg(test)]
#[path = "walker_test.rs"]
mod tests;

pub const DEFAULT_MAX_NESTING: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Record the visited kinds.
    pub trace: bool,
    /// Deepest recursion allowed before giving up with `NestingTooDeep`.
    pub max_nesting: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            trace: false,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub name: &'static str,
    /// Cosmetic indentation; transparent nodes pull it back by one.
    pub indent: i32,
}

/// Visited node kinds in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    #[must_use]
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One kind per line, indented two spaces per level.
    #[must_use]
    pub fn render_indented(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let width = usize::try_from(entry.indent.max(0)).unwrap_or(0) * 2;
            out.push_str(&" ".repeat(width));
            out.push_str(entry.name);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(entry.name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub depth: i64,
    pub trace: Option<Trace>,
}

pub struct DepthWalker<'t> {
    tree: &'t ParseTree,
    depth: i64,
    level: usize,
    max_nesting: usize,
    trace: Option<Vec<TraceEntry>>,
}

impl<'t> DepthWalker<'t> {
    #[must_use]
    pub fn new(tree: &'t ParseTree, options: &WalkOptions) -> Self {
        Self {
            tree,
            depth: 0,
            level: 0,
            max_nesting: options.max_nesting,
            trace: options.trace.then(Vec::new),
        }
    }

    /// Running total so far.
    #[must_use]
    pub fn depth(&self) -> i64 {
        self.depth
    }

    /// Visits `node` and everything below it. An absent node is a no-op.
    ///
    /// # Errors
    /// Returns `NestingTooDeep` when recursion exceeds the configured limit.
    pub fn walk(&mut self, node: Option<NodeId>, indent: i32) -> Result<()> {
        let Some(id) = node else {
            return Ok(());
        };
        if self.level >= self.max_nesting {
            return Err(ScoreError::NestingTooDeep {
                limit: self.max_nesting,
            });
        }

        let tree = self.tree;
        let node = tree.node(id);
        let kind = node.kind();
        let mut indent = indent;

        self.depth += 1;
        if is_transparent(kind) {
            self.depth -= 1;
            indent -= 1;
        }
        self.depth += weight_adjustment(kind);

        if let Some(trace) = self.trace.as_mut() {
            trace.push(TraceEntry {
                name: kind.name(),
                indent,
            });
        }

        self.level += 1;
        let result = self.descend(node.arity(), indent + 1);
        self.level -= 1;
        result
    }

    fn descend(&mut self, arity: &Arity, indent: i32) -> Result<()> {
        match *arity {
            Arity::Unary { kid } => self.walk(kid, indent),
            Arity::Binary { left, right } => {
                if left != right {
                    self.walk(left, indent)?;
                }
                self.walk(right, indent)
            }
            Arity::Ternary { kid1, kid2, kid3 } => {
                self.walk(kid1, indent)?;
                self.walk(kid2, indent)?;
                self.walk(kid3, indent)
            }
            Arity::List { head, .. } => {
                let mut cursor = head;
                while let Some(item) = cursor {
                    self.walk(Some(item), indent)?;
                    cursor = self.tree.node(item).next();
                }
                Ok(())
            }
            Arity::Func { body } => self.walk(body, indent),
            Arity::Name { expr } => self.walk(expr, indent),
            Arity::Nullary => Ok(()),
        }
    }

    #[must_use]
    pub fn finish(self) -> Score {
        Score {
            depth: self.depth,
            trace: self.trace.map(|entries| Trace { entries }),
        }
    }
}

/// Scores a whole tree from its root with a fresh counter.
///
/// # Errors
/// Returns `NestingTooDeep` when the tree is deeper than `options.max_nesting`.
pub fn compute_depth(tree: &ParseTree, options: &WalkOptions) -> Result<Score> {
    let mut walker = DepthWalker::new(tree, options);
    walker.walk(tree.root(), 0)?;
    let score = walker.finish();
    tracing::debug!(nodes = tree.len(), depth = score.depth, "walked parse tree");
    Ok(score)
}

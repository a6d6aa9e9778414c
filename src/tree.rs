// src/tree.rs
//! Arena-owned parse tree consumed by the depth walker.
//!
//! Nodes are appended bottom-up by [`TreeBuilder`], so a child always has a
//! smaller id than its parent and the tree cannot contain cycles. Each node is
//! claimed by at most one parent; the only sharing allowed is a binary node
//! whose left and right are the same child.

use crate::kind::{NodeKind, RawKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// How a node links to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary {
        kid: Option<NodeId>,
    },
    Binary {
        left: Option<NodeId>,
        right: Option<NodeId>,
    },
    Ternary {
        kid1: Option<NodeId>,
        kid2: Option<NodeId>,
        kid3: Option<NodeId>,
    },
    /// Elements are chained through [`ParseNode::next`] starting at `head`.
    List {
        head: Option<NodeId>,
        len: u32,
    },
    Func {
        body: Option<NodeId>,
    },
    Name {
        expr: Option<NodeId>,
    },
    Nullary,
}

/// Tag of an [`Arity`], without the child links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArityShape {
    Unary,
    Binary,
    Ternary,
    List,
    Func,
    Name,
    Nullary,
}

impl Arity {
    #[must_use]
    pub const fn shape(&self) -> ArityShape {
        match self {
            Self::Unary { .. } => ArityShape::Unary,
            Self::Binary { .. } => ArityShape::Binary,
            Self::Ternary { .. } => ArityShape::Ternary,
            Self::List { .. } => ArityShape::List,
            Self::Func { .. } => ArityShape::Func,
            Self::Name { .. } => ArityShape::Name,
            Self::Nullary => ArityShape::Nullary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    kind: RawKind,
    arity: Arity,
    next: Option<NodeId>,
}

impl ParseNode {
    #[must_use]
    pub fn kind(&self) -> RawKind {
        self.kind
    }

    #[must_use]
    pub fn arity(&self) -> &Arity {
        &self.arity
    }

    /// Following sibling when this node is a list element.
    #[must_use]
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseTree {
    nodes: Vec<ParseNode>,
    root: Option<NodeId>,
}

impl ParseTree {
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&ParseNode> {
        self.nodes.get(id.index())
    }

    /// Resolves an id produced by this tree's builder.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree. That can only happen when
    /// ids from different trees are mixed, which is a broken caller contract.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &ParseNode {
        match self.nodes.get(id.index()) {
            Some(node) => node,
            None => panic!(
                "invariant violation: node {} outside tree of {} nodes",
                id.index(),
                self.nodes.len()
            ),
        }
    }

    /// Elements of a list node in link order. Empty for other arities.
    #[must_use]
    pub fn list_items(&self, id: NodeId) -> ListItems<'_> {
        let (head, len) = match self.node(id).arity {
            Arity::List { head, len } => (head, len as usize),
            _ => (None, 0),
        };
        ListItems {
            tree: self,
            cursor: head,
            remaining: len,
        }
    }

    /// First node of `kind` in creation order (innermost first).
    #[must_use]
    pub fn find(&self, kind: NodeKind) -> Option<NodeId> {
        let raw = RawKind::from(kind);
        self.nodes
            .iter()
            .position(|n| n.kind == raw)
            .and_then(|i| u32::try_from(i).ok())
            .map(NodeId)
    }
}

pub struct ListItems<'t> {
    tree: &'t ParseTree,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl Iterator for ListItems<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.cursor?;
        self.cursor = self.tree.node(current).next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ListItems<'_> {}

/// Appends nodes bottom-up and hands out [`NodeId`]s.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<ParseNode>,
    claimed: Vec<bool>,
}

impl TreeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf(&mut self, kind: impl Into<RawKind>) -> NodeId {
        self.push(kind.into(), Arity::Nullary)
    }

    pub fn unary(&mut self, kind: impl Into<RawKind>, kid: Option<NodeId>) -> NodeId {
        self.claim_all(&[kid]);
        self.push(kind.into(), Arity::Unary { kid })
    }

    /// `left` and `right` may be the same node.
    pub fn binary(
        &mut self,
        kind: impl Into<RawKind>,
        left: Option<NodeId>,
        right: Option<NodeId>,
    ) -> NodeId {
        if left.is_some() && left == right {
            self.claim_all(&[left]);
        } else {
            self.claim_all(&[left, right]);
        }
        self.push(kind.into(), Arity::Binary { left, right })
    }

    pub fn ternary(
        &mut self,
        kind: impl Into<RawKind>,
        kid1: Option<NodeId>,
        kid2: Option<NodeId>,
        kid3: Option<NodeId>,
    ) -> NodeId {
        self.claim_all(&[kid1, kid2, kid3]);
        self.push(kind.into(), Arity::Ternary { kid1, kid2, kid3 })
    }

    /// Links `items` into a sibling chain owned by a new list node.
    pub fn list(&mut self, kind: impl Into<RawKind>, items: &[NodeId]) -> NodeId {
        for &item in items {
            self.claim(item);
        }
        for pair in items.windows(2) {
            if let [prev, next] = *pair {
                self.nodes[prev.index()].next = Some(next);
            }
        }
        let len = u32::try_from(items.len()).unwrap_or(u32::MAX);
        self.push(
            kind.into(),
            Arity::List {
                head: items.first().copied(),
                len,
            },
        )
    }

    pub fn func(&mut self, kind: impl Into<RawKind>, body: Option<NodeId>) -> NodeId {
        self.claim_all(&[body]);
        self.push(kind.into(), Arity::Func { body })
    }

    pub fn name(&mut self, kind: impl Into<RawKind>, expr: Option<NodeId>) -> NodeId {
        self.claim_all(&[expr]);
        self.push(kind.into(), Arity::Name { expr })
    }

    #[must_use]
    pub fn finish(self, root: Option<NodeId>) -> ParseTree {
        if let Some(root) = root {
            self.check(root);
        }
        ParseTree {
            nodes: self.nodes,
            root,
        }
    }

    fn push(&mut self, kind: RawKind, arity: Arity) -> NodeId {
        let index = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("invariant violation: tree exceeds u32::MAX nodes"));
        self.nodes.push(ParseNode {
            kind,
            arity,
            next: None,
        });
        self.claimed.push(false);
        NodeId(index)
    }

    fn claim_all(&mut self, kids: &[Option<NodeId>]) {
        for kid in kids.iter().flatten() {
            self.claim(*kid);
        }
    }

    fn claim(&mut self, id: NodeId) {
        self.check(id);
        let slot = &mut self.claimed[id.index()];
        assert!(!*slot, "invariant violation: node {} has two parents", id.index());
        *slot = true;
    }

    fn check(&self, id: NodeId) {
        assert!(
            id.index() < self.nodes.len(),
            "invariant violation: node {} not created by this builder",
            id.index()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_links_in_order() {
        let mut b = TreeBuilder::new();
        let a = b.leaf(NodeKind::Number);
        let c = b.leaf(NodeKind::String);
        let d = b.leaf(NodeKind::Primary);
        let list = b.list(NodeKind::Rb, &[a, c, d]);
        let tree = b.finish(Some(list));

        let items: Vec<NodeId> = tree.list_items(list).collect();
        assert_eq!(items, vec![a, c, d]);
        assert_eq!(tree.node(d).next(), None);
        assert_eq!(tree.node(list).arity(), &Arity::List { head: Some(a), len: 3 });
    }

    #[test]
    fn test_list_items_report_exact_length() {
        let mut b = TreeBuilder::new();
        let a = b.leaf(NodeKind::Number);
        let c = b.leaf(NodeKind::Number);
        let d = b.leaf(NodeKind::Number);
        let list = b.list(NodeKind::Rb, &[a, c, d]);
        let leaf = b.leaf(NodeKind::Name);
        let tree = b.finish(Some(list));

        let mut items = tree.list_items(list);
        assert_eq!(items.size_hint(), (3, Some(3)));
        items.next();
        assert_eq!(items.len(), 2);
        assert_eq!(tree.list_items(leaf).len(), 0);
    }

    #[test]
    fn test_binary_alias_is_one_claim() {
        let mut b = TreeBuilder::new();
        let leaf = b.leaf(NodeKind::Name);
        let bin = b.binary(NodeKind::Assign, Some(leaf), Some(leaf));
        let tree = b.finish(Some(bin));
        assert_eq!(tree.node(bin).arity().shape(), ArityShape::Binary);
    }

    #[test]
    #[should_panic(expected = "two parents")]
    fn test_second_parent_rejected() {
        let mut b = TreeBuilder::new();
        let leaf = b.leaf(NodeKind::Number);
        b.unary(NodeKind::Semi, Some(leaf));
        b.unary(NodeKind::Return, Some(leaf));
    }

    #[test]
    #[should_panic(expected = "invariant violation")]
    fn test_foreign_id_panics() {
        let mut other = TreeBuilder::new();
        other.leaf(NodeKind::Number);
        let foreign = other.leaf(NodeKind::Number);

        let mut b = TreeBuilder::new();
        let root = b.leaf(NodeKind::Number);
        let tree = b.finish(Some(root));
        let _ = tree.node(foreign);
    }

    #[test]
    fn test_find_returns_innermost_first() {
        let mut b = TreeBuilder::new();
        let inner = b.list(NodeKind::Lc, &[]);
        let semi = b.unary(NodeKind::Semi, Some(inner));
        let outer = b.list(NodeKind::Lc, &[semi]);
        let tree = b.finish(Some(outer));
        assert_eq!(tree.find(NodeKind::Lc), Some(inner));
        assert_eq!(tree.find(NodeKind::If), None);
    }
}

// src/lower/jsx.rs
//! JSX markup, lowered onto the engine's XML literal kinds.

use tree_sitter::Node;

use super::{named_kids, Lowerer};
use crate::error::Result;
use crate::kind::NodeKind;
use crate::tree::NodeId;

impl Lowerer {
    /// Elements keep their tags and children in source order. A fragment
    /// (`<>...</>`) has no tag name and becomes an `XMLLIST`.
    pub(super) fn jsx_element(&mut self, node: Node<'_>) -> Result<NodeId> {
        let is_fragment = node
            .child_by_field_name("open_tag")
            .is_some_and(|open| open.child_by_field_name("name").is_none());
        let kind = if is_fragment {
            NodeKind::XmlList
        } else {
            NodeKind::XmlElem
        };
        self.list_of(kind, node)
    }

    pub(super) fn jsx_tag(&mut self, kind: NodeKind, node: Node<'_>) -> Result<NodeId> {
        let name_id = node.child_by_field_name("name").map(|n| n.id());
        let mut items = Vec::new();
        for kid in named_kids(node) {
            if Some(kid.id()) == name_id {
                items.push(self.builder.leaf(NodeKind::XmlName));
            } else if let Some(id) = self.lower(kid)? {
                items.push(id);
            }
        }
        Ok(self.builder.list(kind, &items))
    }

    pub(super) fn jsx_attribute(&mut self, node: Node<'_>) -> Result<NodeId> {
        let mut kids = named_kids(node).into_iter();
        let mut items = Vec::new();
        if kids.next().is_some() {
            items.push(self.builder.leaf(NodeKind::XmlName));
        }
        items.extend(self.lower_all(kids)?);
        Ok(self.builder.list(NodeKind::XmlAttr, &items))
    }
}

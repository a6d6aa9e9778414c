// src/classify.rs
//! Static per-kind rules for the depth heuristic.
//!
//! Two independent questions are answered for every node kind:
//! whether the node is connective syntax that adds no depth (transparent),
//! and by how much it biases the score. Call and grouping syntax weighs more,
//! plain identifiers weigh less.

use crate::kind::{Category, NodeKind, RawKind};

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;

const CALL_WEIGHT: i64 = 2;
const NAME_WEIGHT: i64 = -1;

/// Returns true if nodes of this kind are filtered out of the depth count.
///
/// Member access, the arithmetic operators and `|`, and the whole XML
/// markup family are transparent. Unknown kinds never are.
#[must_use]
pub fn is_transparent(kind: RawKind) -> bool {
    kind.known().is_some_and(kind_is_transparent)
}

/// Weight added to the running depth whenever a node of this kind is visited.
#[must_use]
pub fn weight_adjustment(kind: RawKind) -> i64 {
    match kind.known() {
        Some(NodeKind::Lp) => CALL_WEIGHT,
        Some(NodeKind::Name) => NAME_WEIGHT,
        _ => 0,
    }
}

fn kind_is_transparent(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Dot
            | NodeKind::Plus
            | NodeKind::Minus
            | NodeKind::Star
            | NodeKind::DivOp
            | NodeKind::BitOr
    ) || kind.category() == Category::Xml
}

// src/classify_test.rs

use super::*;

fn raw(kind: NodeKind) -> RawKind {
    RawKind::from(kind)
}

#[test]
fn test_operator_transparency() {
    for kind in [
        NodeKind::Dot,
        NodeKind::Plus,
        NodeKind::Minus,
        NodeKind::Star,
        NodeKind::DivOp,
        NodeKind::BitOr,
    ] {
        assert!(is_transparent(raw(kind)), "{kind} should be transparent");
    }
}

#[test]
fn test_lookalike_operators_count() {
    // Same family as transparent kinds but not members of the set.
    for kind in [NodeKind::BitXor, NodeKind::BitAnd, NodeKind::ShOp, NodeKind::DblDot] {
        assert!(!is_transparent(raw(kind)), "{kind} should count");
    }
}

#[test]
fn test_whole_xml_family_is_transparent() {
    let xml: Vec<NodeKind> = NodeKind::ALL
        .into_iter()
        .filter(|k| k.category() == Category::Xml)
        .collect();
    assert_eq!(xml.len(), 13);
    assert!(xml.into_iter().all(|k| is_transparent(raw(k))));
}

#[test]
fn test_lp_counts_and_weighs_two() {
    assert!(!is_transparent(raw(NodeKind::Lp)));
    assert_eq!(weight_adjustment(raw(NodeKind::Lp)), 2);
}

#[test]
fn test_name_weighs_minus_one() {
    assert!(!is_transparent(raw(NodeKind::Name)));
    assert_eq!(weight_adjustment(raw(NodeKind::Name)), -1);
    assert_eq!(weight_adjustment(raw(NodeKind::XmlName)), 0);
    assert_eq!(weight_adjustment(raw(NodeKind::AnyName)), 0);
}

#[test]
fn test_other_kinds_have_no_weight() {
    let weighted = NodeKind::ALL
        .into_iter()
        .filter(|&k| weight_adjustment(raw(k)) != 0)
        .count();
    assert_eq!(weighted, 2);
}

#[test]
fn test_unknown_kind_defaults() {
    for kind in [RawKind::new(81), RawKind::new(500), RawKind::UNMAPPED] {
        assert!(!is_transparent(kind));
        assert_eq!(weight_adjustment(kind), 0);
    }
}

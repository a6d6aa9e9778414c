// src/kind.rs
//! The closed set of parse-node kinds and their categories.
//!
//! Kinds follow the token table of the classic JavaScript engine the depth
//! heuristic was tuned against. Discriminants are stable: a node stores its
//! kind as a [`RawKind`] and anything outside `0..NodeKind::COUNT` is unknown.

use std::fmt;

/// Trace marker for kinds outside the known table.
pub const UNKNOWN_NAME: &str = "UNKNOWN";

/// Coarse grouping of kinds, declared next to the enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Statement and stream terminators (`EOF`, `SEMI`, `COMMA`, ...).
    Terminator,
    /// Assignment, logical, bitwise, arithmetic and member operators.
    Operator,
    /// Brackets, braces and parentheses.
    Bracket,
    /// Names and literal values.
    Literal,
    /// Keyword-introduced constructs.
    Keyword,
    /// XML literal markup (`XMLSTAGO` .. `XMLLIST`).
    Xml,
    /// XML query operators that are not markup (`AT`, `DBLDOT`, ...).
    E4x,
    /// Table sentinels.
    Sentinel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum NodeKind {
    Eof = 0,
    Eol,
    Semi,
    Comma,
    Assign,
    Hook,
    Colon,
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    EqOp,
    RelOp,
    ShOp,
    Plus,
    Minus,
    Star,
    DivOp,
    UnaryOp,
    Inc,
    Dec,
    Dot,
    Lb,
    Rb,
    Lc,
    Rc,
    Lp,
    Rp,
    Name,
    Number,
    String,
    Object,
    Primary,
    Function,
    Export,
    Import,
    If,
    Else,
    Switch,
    Case,
    Default,
    While,
    Do,
    For,
    Break,
    Continue,
    In,
    Var,
    With,
    Return,
    New,
    Delete,
    DefSharp,
    UseSharp,
    Try,
    Catch,
    Finally,
    Throw,
    InstanceOf,
    Debugger,
    XmlStago,
    XmlEtago,
    XmlPtagc,
    XmlTagc,
    XmlName,
    XmlAttr,
    XmlSpace,
    XmlText,
    XmlComment,
    XmlCdata,
    XmlPi,
    At,
    DblColon,
    AnyName,
    DblDot,
    Filter,
    XmlElem,
    XmlList,
    Reserved,
    Limit,
}

// Indexed by discriminant.
const NAMES: [&str; NodeKind::COUNT] = [
    "EOF", "EOL", "SEMI", "COMMA", "ASSIGN", "HOOK", "COLON", "OR", "AND",
    "BITOR", "BITXOR", "BITAND", "EQOP", "RELOP", "SHOP", "PLUS", "MINUS", "STAR",
    "DIVOP", "UNARYOP", "INC", "DEC", "DOT", "LB", "RB", "LC", "RC", "LP", "RP",
    "NAME", "NUMBER", "STRING", "OBJECT", "PRIMARY", "FUNCTION", "EXPORT",
    "IMPORT", "IF", "ELSE", "SWITCH", "CASE", "DEFAULT", "WHILE", "DO", "FOR",
    "BREAK", "CONTINUE", "IN", "VAR", "WITH", "RETURN", "NEW", "DELETE",
    "DEFSHARP", "USESHARP", "TRY", "CATCH", "FINALLY", "THROW", "INSTANCEOF",
    "DEBUGGER", "XMLSTAGO", "XMLETAGO", "XMLPTAGC", "XMLTAGC", "XMLNAME",
    "XMLATTR", "XMLSPACE", "XMLTEXT", "XMLCOMMENT", "XMLCDATA", "XMLPI", "AT",
    "DBLCOLON", "ANYNAME", "DBLDOT", "FILTER", "XMLELEM", "XMLLIST", "RESERVED",
    "LIMIT",
];

impl NodeKind {
    pub const COUNT: usize = 81;

    /// Every kind, in discriminant order.
    pub const ALL: [NodeKind; NodeKind::COUNT] = [
        Self::Eof, Self::Eol, Self::Semi, Self::Comma, Self::Assign, Self::Hook,
        Self::Colon, Self::Or, Self::And, Self::BitOr, Self::BitXor, Self::BitAnd,
        Self::EqOp, Self::RelOp, Self::ShOp, Self::Plus, Self::Minus, Self::Star,
        Self::DivOp, Self::UnaryOp, Self::Inc, Self::Dec, Self::Dot, Self::Lb,
        Self::Rb, Self::Lc, Self::Rc, Self::Lp, Self::Rp, Self::Name, Self::Number,
        Self::String, Self::Object, Self::Primary, Self::Function, Self::Export,
        Self::Import, Self::If, Self::Else, Self::Switch, Self::Case, Self::Default,
        Self::While, Self::Do, Self::For, Self::Break, Self::Continue, Self::In,
        Self::Var, Self::With, Self::Return, Self::New, Self::Delete, Self::DefSharp,
        Self::UseSharp, Self::Try, Self::Catch, Self::Finally, Self::Throw,
        Self::InstanceOf, Self::Debugger, Self::XmlStago, Self::XmlEtago,
        Self::XmlPtagc, Self::XmlTagc, Self::XmlName, Self::XmlAttr, Self::XmlSpace,
        Self::XmlText, Self::XmlComment, Self::XmlCdata, Self::XmlPi, Self::At,
        Self::DblColon, Self::AnyName, Self::DblDot, Self::Filter, Self::XmlElem,
        Self::XmlList, Self::Reserved, Self::Limit,
    ];

    #[must_use]
    pub fn from_index(index: u16) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    #[must_use]
    pub const fn index(self) -> u16 {
        self as u16
    }

    /// Upper-case token name, e.g. `"LP"`.
    // Indexing is safe: the discriminant is always below COUNT
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Eof | Self::Eol | Self::Semi | Self::Comma => Category::Terminator,
            Self::Assign
            | Self::Hook
            | Self::Colon
            | Self::Or
            | Self::And
            | Self::BitOr
            | Self::BitXor
            | Self::BitAnd
            | Self::EqOp
            | Self::RelOp
            | Self::ShOp
            | Self::Plus
            | Self::Minus
            | Self::Star
            | Self::DivOp
            | Self::UnaryOp
            | Self::Inc
            | Self::Dec
            | Self::Dot => Category::Operator,
            Self::Lb | Self::Rb | Self::Lc | Self::Rc | Self::Lp | Self::Rp => Category::Bracket,
            Self::Name | Self::Number | Self::String | Self::Object | Self::Primary => {
                Category::Literal
            }
            Self::XmlStago
            | Self::XmlEtago
            | Self::XmlPtagc
            | Self::XmlTagc
            | Self::XmlName
            | Self::XmlAttr
            | Self::XmlSpace
            | Self::XmlText
            | Self::XmlComment
            | Self::XmlCdata
            | Self::XmlPi
            | Self::XmlElem
            | Self::XmlList => Category::Xml,
            Self::At | Self::DblColon | Self::AnyName | Self::DblDot | Self::Filter => {
                Category::E4x
            }
            Self::Reserved | Self::Limit => Category::Sentinel,
            _ => Category::Keyword,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A kind value as stored on a tree node. May lie outside the known table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawKind(u16);

impl RawKind {
    /// Used by the lowering pass for constructs it has no mapping for.
    pub const UNMAPPED: RawKind = RawKind(u16::MAX);

    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn known(self) -> Option<NodeKind> {
        NodeKind::from_index(self.0)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.known().map_or(UNKNOWN_NAME, NodeKind::name)
    }
}

impl From<NodeKind> for RawKind {
    fn from(kind: NodeKind) -> Self {
        Self(kind.index())
    }
}

impl fmt::Display for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_in_discriminant_order() {
        for (i, kind) in NodeKind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.index()), i, "{kind:?} out of place");
        }
        assert_eq!(NodeKind::Limit.index(), 80);
    }

    #[test]
    fn test_names() {
        assert_eq!(NodeKind::Lp.name(), "LP");
        assert_eq!(NodeKind::XmlPtagc.name(), "XMLPTAGC");
        assert_eq!(NodeKind::InstanceOf.name(), "INSTANCEOF");
        assert_eq!(NodeKind::Reserved.to_string(), "RESERVED");
    }

    #[test]
    fn test_xml_category_matches_name_family() {
        for kind in NodeKind::ALL {
            assert_eq!(
                kind.category() == Category::Xml,
                kind.name().starts_with("XML"),
                "{kind}"
            );
        }
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        assert_eq!(NodeKind::from_index(81), None);
        assert_eq!(RawKind::new(81).known(), None);
        assert_eq!(RawKind::UNMAPPED.name(), UNKNOWN_NAME);
        assert_eq!(RawKind::from(NodeKind::Name).name(), "NAME");
    }
}

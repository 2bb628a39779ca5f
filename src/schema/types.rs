//! Schema Types
//!
//! The closed set of element kinds and marks, and the structural rule
//! attached to each element kind.

use std::fmt;
use std::str::FromStr;

/// Inline style flag allowed on a text leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
}

impl Mark {
    pub const ALL: [Mark; 5] = [
        Mark::Bold,
        Mark::Italic,
        Mark::Underline,
        Mark::Strikethrough,
        Mark::Code,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Underline => "underline",
            Mark::Strikethrough => "strikethrough",
            Mark::Code => "code",
        }
    }
}

impl FromStr for Mark {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mark::ALL
            .into_iter()
            .find(|mark| mark.as_str() == s)
            .ok_or(())
    }
}

/// Recognized element (container) types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Paragraph,
    Blockquote,
    UnorderedList,
    OrderedList,
    ListItem,
    ListItemContent,
    Table,
    TableRow,
    TableHeader,
    TableCell,
    Image,
    Link,
    CodeBlock,
    CodeLine,
}

impl ElementKind {
    pub const ALL: [ElementKind; 20] = [
        ElementKind::H1,
        ElementKind::H2,
        ElementKind::H3,
        ElementKind::H4,
        ElementKind::H5,
        ElementKind::H6,
        ElementKind::Paragraph,
        ElementKind::Blockquote,
        ElementKind::UnorderedList,
        ElementKind::OrderedList,
        ElementKind::ListItem,
        ElementKind::ListItemContent,
        ElementKind::Table,
        ElementKind::TableRow,
        ElementKind::TableHeader,
        ElementKind::TableCell,
        ElementKind::Image,
        ElementKind::Link,
        ElementKind::CodeBlock,
        ElementKind::CodeLine,
    ];

    /// Wire name used in the `type` field
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::H1 => "h1",
            ElementKind::H2 => "h2",
            ElementKind::H3 => "h3",
            ElementKind::H4 => "h4",
            ElementKind::H5 => "h5",
            ElementKind::H6 => "h6",
            ElementKind::Paragraph => "p",
            ElementKind::Blockquote => "blockquote",
            ElementKind::UnorderedList => "ul",
            ElementKind::OrderedList => "ol",
            ElementKind::ListItem => "li",
            ElementKind::ListItemContent => "lic",
            ElementKind::Table => "table",
            ElementKind::TableRow => "tr",
            ElementKind::TableHeader => "th",
            ElementKind::TableCell => "td",
            ElementKind::Image => "img",
            ElementKind::Link => "a",
            ElementKind::CodeBlock => "code_block",
            ElementKind::CodeLine => "code_line",
        }
    }

    /// Structural rule for this element kind
    pub fn rule(self) -> StructuralRule {
        use ElementKind::*;

        match self {
            H1 | H2 | H3 | H4 | H5 | H6 | Paragraph | Blockquote => StructuralRule::OPEN,
            UnorderedList | OrderedList => StructuralRule {
                must_not_be_empty: true,
                allowed_children: Some(&[ListItem]),
                ..StructuralRule::OPEN
            },
            ListItem => StructuralRule {
                must_not_be_empty: true,
                ..StructuralRule::OPEN
            },
            ListItemContent => StructuralRule::OPEN,
            Table => StructuralRule {
                must_not_be_empty: true,
                allowed_children: Some(&[TableRow]),
                ..StructuralRule::OPEN
            },
            TableRow => StructuralRule {
                must_not_be_empty: true,
                allowed_children: Some(&[TableHeader, TableCell]),
                ..StructuralRule::OPEN
            },
            TableHeader | TableCell => StructuralRule::OPEN,
            Image => StructuralRule {
                descends: false,
                attributes: AttributeCheck::Image,
                ..StructuralRule::OPEN
            },
            Link => StructuralRule {
                attributes: AttributeCheck::Link,
                ..StructuralRule::OPEN
            },
            CodeBlock => StructuralRule {
                must_not_be_empty: true,
                allowed_children: Some(&[CodeLine]),
                ..StructuralRule::OPEN
            },
            CodeLine => StructuralRule::OPEN,
        }
    }
}

impl FromStr for ElementKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute requirements beyond `type` and `children`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeCheck {
    None,
    /// String `url` plus numeric `width` and `height`
    Image,
    /// String `url`
    Link,
}

/// Per-type structural policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralRule {
    /// Fail with empty content when `children` is empty
    pub must_not_be_empty: bool,
    /// Permitted child element kinds; `None` means unconstrained
    pub allowed_children: Option<&'static [ElementKind]>,
    /// Whether children are validated recursively
    pub descends: bool,
    pub attributes: AttributeCheck,
}

impl StructuralRule {
    /// No constraints, recursive descent.
    pub const OPEN: StructuralRule = StructuralRule {
        must_not_be_empty: false,
        allowed_children: None,
        descends: true,
        attributes: AttributeCheck::None,
    };

    pub fn permits_child(&self, kind: Option<ElementKind>) -> bool {
        match self.allowed_children {
            None => true,
            Some(allowed) => kind.is_some_and(|k| allowed.contains(&k)),
        }
    }

    /// Human readable list of permitted child types, e.g. `'th' or 'td'`
    pub fn expected_children(&self) -> String {
        self.allowed_children
            .unwrap_or_default()
            .iter()
            .map(|kind| format!("'{}'", kind))
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

//! Core data structures for the document tree handed over by the parser.
//!
//! A [`Node`] is a kind discriminant, ordered children and a bag of named
//! properties. The tree is built once by the caller and only read here.

use crate::error::TranscodeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Discriminant identifying the document construct a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Document,
    Headline,
    Section,
    Paragraph,
    Bold,
    Italic,
    Underline,
    StrikeThrough,
    Code,
    Verbatim,
    PlainText,
    SourceBlock,
    QuoteBlock,
    Link,
    List,
    Item,
    Table,
    TableRow,
    TableCell,
    FootnoteReference,
    FootnoteDefinition,
    LineBreak,
    HorizontalRule,
    Keyword,
    Comment,
    Planning,
    PropertyDrawer,
    Timestamp,
}

impl NodeKind {
    /// The kebab-case name used in serialized trees and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Headline => "headline",
            NodeKind::Section => "section",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Bold => "bold",
            NodeKind::Italic => "italic",
            NodeKind::Underline => "underline",
            NodeKind::StrikeThrough => "strike-through",
            NodeKind::Code => "code",
            NodeKind::Verbatim => "verbatim",
            NodeKind::PlainText => "plain-text",
            NodeKind::SourceBlock => "source-block",
            NodeKind::QuoteBlock => "quote-block",
            NodeKind::Link => "link",
            NodeKind::List => "list",
            NodeKind::Item => "item",
            NodeKind::Table => "table",
            NodeKind::TableRow => "table-row",
            NodeKind::TableCell => "table-cell",
            NodeKind::FootnoteReference => "footnote-reference",
            NodeKind::FootnoteDefinition => "footnote-definition",
            NodeKind::LineBreak => "line-break",
            NodeKind::HorizontalRule => "horizontal-rule",
            NodeKind::Keyword => "keyword",
            NodeKind::Comment => "comment",
            NodeKind::Planning => "planning",
            NodeKind::PropertyDrawer => "property-drawer",
            NodeKind::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named node property.
///
/// Secondary strings such as a headline's title are trees of their own and
/// are stored as [`Property::Nodes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Property {
    Bool(bool),
    Int(i64),
    Str(String),
    Nodes(Vec<Node>),
}

impl From<&str> for Property {
    fn from(value: &str) -> Self {
        Property::Str(value.to_string())
    }
}

impl From<String> for Property {
    fn from(value: String) -> Self {
        Property::Str(value)
    }
}

impl From<i64> for Property {
    fn from(value: i64) -> Self {
        Property::Int(value)
    }
}

impl From<bool> for Property {
    fn from(value: bool) -> Self {
        Property::Bool(value)
    }
}

impl From<Vec<Node>> for Property {
    fn from(value: Vec<Node>) -> Self {
        Property::Nodes(value)
    }
}

/// A document tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    /// A plain text leaf carrying `value`.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(NodeKind::PlainText).with_property("value", value.into())
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_property(mut self, name: &str, value: impl Into<Property>) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    pub fn str_property(&self, name: &str) -> Option<&str> {
        match self.properties.get(name) {
            Some(Property::Str(value)) => Some(value),
            _ => None,
        }
    }

    pub fn int_property(&self, name: &str) -> Option<i64> {
        match self.properties.get(name) {
            Some(Property::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Absent or non-boolean properties read as `false`.
    pub fn bool_property(&self, name: &str) -> bool {
        matches!(self.properties.get(name), Some(Property::Bool(true)))
    }

    pub fn nodes_property(&self, name: &str) -> Option<&[Node]> {
        match self.properties.get(name) {
            Some(Property::Nodes(nodes)) => Some(nodes),
            _ => None,
        }
    }

    /// String property that the handler cannot do without.
    pub fn require_str(&self, name: &'static str) -> Result<&str, TranscodeError> {
        self.str_property(name)
            .ok_or(TranscodeError::MissingProperty {
                kind: self.kind,
                property: name,
            })
    }

    /// Integer property that the handler cannot do without.
    pub fn require_int(&self, name: &'static str) -> Result<i64, TranscodeError> {
        self.int_property(name)
            .ok_or(TranscodeError::MissingProperty {
                kind: self.kind,
                property: name,
            })
    }

    /// Visits this node and every descendant in document order.
    ///
    /// Nodes stored in properties are visited as well, after the node that
    /// owns them and before its children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for property in self.properties.values() {
            if let Property::Nodes(nodes) = property {
                for node in nodes {
                    node.walk(visit);
                }
            }
        }
        for child in &self.children {
            child.walk(visit);
        }
    }
}

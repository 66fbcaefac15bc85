//! Shared builders for the integration tests.

#![allow(dead_code)]

use scribe_babel::{read_tree, ExportOptions, Format, Node, NodeKind};

pub const KITCHENSINK: &str = include_str!("../fixtures/kitchensink.json");

pub fn kitchensink() -> Node {
    read_tree(KITCHENSINK).expect("kitchensink fixture should parse")
}

pub fn export(format: &dyn Format, tree: &Node) -> String {
    format
        .serialize(tree, &ExportOptions::default())
        .expect("export should succeed")
}

pub fn text(value: &str) -> Node {
    Node::text(value)
}

pub fn node(kind: NodeKind, children: Vec<Node>) -> Node {
    Node::new(kind).with_children(children)
}

pub fn paragraph(children: Vec<Node>) -> Node {
    node(NodeKind::Paragraph, children)
}

pub fn section(children: Vec<Node>) -> Node {
    node(NodeKind::Section, children)
}

pub fn document(children: Vec<Node>) -> Node {
    node(NodeKind::Document, children)
}

pub fn headline(level: i64, title: &str, children: Vec<Node>) -> Node {
    Node::new(NodeKind::Headline)
        .with_property("level", level)
        .with_property("title", vec![Node::text(title)])
        .with_children(children)
}

pub fn link(link_type: &str, path: &str, raw_link: &str, description: &str) -> Node {
    Node::new(NodeKind::Link)
        .with_property("type", link_type)
        .with_property("path", path)
        .with_property("raw_link", raw_link)
        .with_child(Node::text(description))
}

pub fn footnote_ref(label: &str) -> Node {
    Node::new(NodeKind::FootnoteReference).with_property("label", label)
}

pub fn footnote_def(label: &str, body: &str) -> Node {
    Node::new(NodeKind::FootnoteDefinition)
        .with_property("label", label)
        .with_child(Node::text(body))
}

pub fn source_block(language: &str, value: &str) -> Node {
    Node::new(NodeKind::SourceBlock)
        .with_property("language", language)
        .with_property("value", value)
}

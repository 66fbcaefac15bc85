//! Footnote bookkeeping for a single export run.
//!
//! Ids are handed out in order of first reference, not definition order.
//! Definitions are rendered once, on first reference, and kept until the
//! footnote section is assembled at the end of the run.

use crate::ir::nodes::{Node, NodeKind};
use std::collections::{BTreeMap, HashMap};

/// Footnote definitions found in a tree, keyed by label.
pub type FootnoteDefinitions<'a> = HashMap<&'a str, &'a Node>;

/// Collects every `FootnoteDefinition` in `tree` by its `label` property.
///
/// When a label is defined twice the first definition in document order wins.
pub fn collect_definitions(tree: &Node) -> FootnoteDefinitions<'_> {
    let mut definitions = FootnoteDefinitions::new();
    tree.walk(&mut |node| {
        if node.kind != NodeKind::FootnoteDefinition {
            return;
        }
        if let Some(label) = node.str_property("label") {
            definitions.entry(label).or_insert(node);
        }
    });
    definitions
}

/// Per-run footnote state. Never shared between runs.
#[derive(Debug, Default)]
pub struct FootnoteRegistry {
    ids: HashMap<String, usize>,
    definitions: BTreeMap<usize, String>,
}

impl FootnoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id already assigned to `label`, if any.
    pub fn lookup(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    /// Returns the id for `label`, assigning the next one if it is new.
    ///
    /// The flag is `true` when the id was assigned by this call.
    pub fn assign(&mut self, label: &str) -> (usize, bool) {
        if let Some(id) = self.lookup(label) {
            return (id, false);
        }
        let id = self.ids.len() + 1;
        self.ids.insert(label.to_string(), id);
        (id, true)
    }

    /// Stores the rendered definition for `id`, trimmed.
    pub fn define(&mut self, id: usize, rendered: &str) {
        self.definitions
            .entry(id)
            .or_insert_with(|| rendered.trim().to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Rendered definitions in ascending id order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.definitions
            .iter()
            .map(|(id, text)| (*id, text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(label: &str, text: &str) -> Node {
        Node::new(NodeKind::FootnoteDefinition)
            .with_property("label", label)
            .with_child(Node::text(text))
    }

    #[test]
    fn test_ids_follow_first_reference() {
        let mut registry = FootnoteRegistry::new();
        assert_eq!(registry.assign("b"), (1, true));
        assert_eq!(registry.assign("a"), (2, true));
        assert_eq!(registry.assign("b"), (1, false));
        assert_eq!(registry.lookup("a"), Some(2));
        assert_eq!(registry.lookup("c"), None);
    }

    #[test]
    fn test_entries_are_sorted_and_trimmed() {
        let mut registry = FootnoteRegistry::new();
        let (first, _) = registry.assign("x");
        let (second, _) = registry.assign("y");
        registry.define(second, "  second\n");
        registry.define(first, "first ");

        let entries: Vec<_> = registry.entries().collect();
        assert_eq!(entries, vec![(1, "first"), (2, "second")]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_define_keeps_the_first_rendering() {
        let mut registry = FootnoteRegistry::new();
        let (id, _) = registry.assign("x");
        registry.define(id, "one");
        registry.define(id, "two");
        assert_eq!(registry.entries().next(), Some((1, "one")));
    }

    #[test]
    fn test_collect_definitions_finds_nested_definitions() {
        let tree = Node::new(NodeKind::Document).with_children(vec![
            Node::new(NodeKind::Section).with_child(definition("1", "first")),
            definition("note", "second"),
            definition("1", "shadowed"),
        ]);

        let definitions = collect_definitions(&tree);
        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions["1"].children[0], Node::text("first"));
        assert!(definitions.contains_key("note"));
    }
}

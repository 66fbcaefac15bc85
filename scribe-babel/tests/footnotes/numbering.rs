//! Footnote numbering across whole documents.

use crate::common::*;
use proptest::prelude::*;
use scribe_babel::{BbcodeFormat, HtmlFormat, Node};

const LABELS: &[&str] = &["a", "b", "c", "d", "e"];

/// A paragraph referencing `refs` in order, followed by a definition for
/// every label.
fn referencing(refs: &[&str]) -> Node {
    let mut children = vec![paragraph(refs.iter().map(|label| footnote_ref(label)).collect())];
    children.extend(
        LABELS
            .iter()
            .map(|label| footnote_def(label, &format!("def-{label}"))),
    );
    document(children)
}

/// Labels in order of first appearance.
fn first_seen<'a>(refs: &[&'a str]) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for label in refs {
        if !seen.contains(label) {
            seen.push(*label);
        }
    }
    seen
}

#[test]
fn test_repeated_reference_reuses_id() {
    let out = export(&BbcodeFormat, &referencing(&["c", "a", "c"]));
    assert_eq!(
        out,
        "^1 ^2 ^1\n\n[b][u]# Footnotes[/u][/b]\n\n^1: def-c\n^2: def-a\n"
    );
}

#[test]
fn test_definitions_before_references() {
    let tree = document(vec![
        footnote_def("x", "ex"),
        paragraph(vec![text("see"), footnote_ref("x")]),
    ]);
    assert_eq!(
        export(&HtmlFormat, &tree),
        "<p>see^1</p>\n<!--  Footnotes  -->\n^1: ex\n"
    );
}

#[test]
fn test_footnote_inside_headline_title_numbered_first() {
    let title = vec![text("Heading"), footnote_ref("b")];
    let tree = document(vec![
        Node::new(scribe_babel::NodeKind::Headline)
            .with_property("level", 3_i64)
            .with_property("title", title)
            .with_child(section(vec![paragraph(vec![footnote_ref("a")])])),
        footnote_def("a", "alpha"),
        footnote_def("b", "beta"),
    ]);
    let out = export(&HtmlFormat, &tree);
    assert!(out.starts_with("<h3>Heading^1</h3>\n<p>^2</p>\n"), "{out}");
    assert!(out.ends_with("^1: beta\n^2: alpha\n"), "{out}");
}

proptest! {
    #[test]
    fn ids_follow_first_reference(refs in prop::collection::vec(prop::sample::select(LABELS), 1..24)) {
        let out = export(&BbcodeFormat, &referencing(&refs));
        let order = first_seen(&refs);

        let body: String = refs
            .iter()
            .map(|label| {
                let id = order.iter().position(|seen| seen == label).unwrap() + 1;
                format!("^{id} ")
            })
            .collect();
        let mut expected = format!("{}\n\n[b][u]# Footnotes[/u][/b]\n\n", body.trim());
        for (index, label) in order.iter().enumerate() {
            expected.push_str(&format!("^{}: def-{label}\n", index + 1));
        }

        prop_assert_eq!(out, expected);
    }

    #[test]
    fn export_is_deterministic(refs in prop::collection::vec(prop::sample::select(LABELS), 0..12)) {
        let tree = referencing(&refs);
        prop_assert_eq!(export(&HtmlFormat, &tree), export(&HtmlFormat, &tree));
    }
}

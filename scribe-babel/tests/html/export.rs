//! Export tests for the HTML format (tree → HTML)
//!
//! These tests build trees by hand (or load the kitchensink fixture) and
//! check the exact fragment the blog engine receives.

use crate::common::*;
use insta::assert_snapshot;
use scribe_babel::{
    ExportOptions, Format, FormatError, HtmlFormat, Node, NodeKind, TranscodeError,
};

fn try_export(tree: &Node) -> Result<String, FormatError> {
    HtmlFormat.serialize(tree, &ExportOptions::default())
}

// ============================================================================
// BASIC ELEMENT TESTS
// ============================================================================

#[test]
fn test_paragraph_in_section() {
    let tree = section(vec![paragraph(vec![
        text("foo "),
        node(NodeKind::Bold, vec![text("BAR")]),
        text(" baz"),
    ])]);
    assert_eq!(export(&HtmlFormat, &tree), "<p>foo <strong>BAR</strong> baz</p>\n");
}

#[test]
fn test_headline_levels() {
    assert_eq!(
        export(&HtmlFormat, &headline(1, "Intro", vec![])),
        "<!--  Intro  -->\n"
    );
    assert_eq!(
        export(&HtmlFormat, &headline(3, "Intro", vec![])),
        "<h3>Intro</h3>\n"
    );
    assert!(matches!(
        try_export(&headline(6, "Intro", vec![])),
        Err(FormatError::Transcode(
            TranscodeError::HeadlineLevelOutOfRange { level: 6, .. }
        ))
    ));
}

#[test]
fn test_todo_link_becomes_abbr() {
    let tree = paragraph(vec![link("todo", "Future post", "todo:Future post", "soon")]);
    assert_eq!(
        export(&HtmlFormat, &tree),
        "<p><abbr title=\"Article forthcoming\">soon</abbr></p>\n"
    );
}

#[test]
fn test_ordered_list_is_rejected() {
    let tree = Node::new(NodeKind::List)
        .with_property("kind", "ordered")
        .with_child(node(NodeKind::Item, vec![text("one")]));
    let err = try_export(&tree).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Transcode error: List kind 'ordered' is not supported by the html profile"
    );
}

#[test]
fn test_source_languages() {
    let cases = [
        ("emacs-lisp", "<pre lang=\"lisp\">(car x)</pre>\n"),
        ("shell", "<pre lang=\"bash\">(car x)</pre>\n"),
        ("", "<pre lang=\"plaintext\">(car x)</pre>\n"),
        ("Elisp", "<pre lang=\"Elisp\">(car x)</pre>\n"),
    ];
    for (language, expected) in cases {
        assert_eq!(export(&HtmlFormat, &source_block(language, "(car x)\n")), expected);
    }
}

#[test]
fn test_plain_tags_carry_no_attributes() {
    let out = export(&HtmlFormat, &kitchensink());
    assert!(!out.contains("<p "));
    assert!(!out.contains("<strong "));
    assert!(!out.contains("<ul "));
    assert!(!out.contains("<li "));
}

#[test]
fn test_body_only_is_inert_for_fragments() {
    let tree = kitchensink();
    let full = HtmlFormat.serialize(&tree, &ExportOptions::default()).unwrap();
    let body = HtmlFormat
        .serialize(&tree, &ExportOptions::default().with_body_only(true))
        .unwrap();
    assert_eq!(full, body);
}

// ============================================================================
// KITCHENSINK
// ============================================================================

#[test]
fn test_kitchensink() {
    let out = export(&HtmlFormat, &kitchensink());
    assert_snapshot!(out, @r###"
<!--  Post title  -->
<p>Intro with <strong>bold</strong> and <code>x &lt; y</code>.</p>
<h3>Details</h3>
<ul>
<li>first</li>
<li><p>second</p></li>
</ul>
<pre lang="bash">echo hi</pre>
<p><a href="https://example.com/">site</a> and note^1</p>
<!--  Footnotes  -->
^1: <p>A note.</p>
"###);
}

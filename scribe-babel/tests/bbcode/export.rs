//! Export tests for the BBCode format (tree → BBCode)

use crate::common::*;
use insta::assert_snapshot;
use scribe_babel::{
    BbcodeFormat, ExportOptions, Format, FormatError, Node, NodeKind, TranscodeError,
};

fn try_export(tree: &Node) -> Result<String, FormatError> {
    BbcodeFormat.serialize(tree, &ExportOptions::default())
}

#[test]
fn test_headline_marker_per_level() {
    assert_eq!(
        export(&BbcodeFormat, &headline(2, "TOPIC", vec![])),
        "[b][u]== TOPIC[/u][/b]\n\n"
    );
    assert_eq!(
        export(&BbcodeFormat, &headline(0, "TOPIC", vec![])),
        "[b][u]TOPIC[/u][/b]\n\n"
    );
}

#[test]
fn test_headline_followed_by_its_section() {
    let tree = headline(
        2,
        "Setup",
        vec![section(vec![paragraph(vec![text("Install it.")])])],
    );
    assert_eq!(
        export(&BbcodeFormat, &tree),
        "[b][u]== Setup[/u][/b]\n\nInstall it.\n\n"
    );
}

#[test]
fn test_todo_link() {
    let tree = link("todo", "Next", "todo:Next", "coming");
    assert_eq!(
        export(&BbcodeFormat, &tree),
        "[abbr=Article forthcoming]coming[/abbr]"
    );
}

#[test]
fn test_list_kinds() {
    let item = |body: &str| node(NodeKind::Item, vec![text(body)]);
    let ordered = Node::new(NodeKind::List)
        .with_property("kind", "ordered")
        .with_children(vec![item("a"), item("b")]);
    assert_eq!(
        export(&BbcodeFormat, &ordered),
        "[list=1]\n[*]a\n[*]b\n[/list]\n"
    );

    let descriptive = Node::new(NodeKind::List)
        .with_property("kind", "descriptive")
        .with_child(
            Node::new(NodeKind::Item)
                .with_property("tag", vec![node(NodeKind::Italic, vec![text("term")])])
                .with_child(text(" explained ")),
        );
    assert_eq!(
        export(&BbcodeFormat, &descriptive),
        "[list]\n[*][b][i]term[/i][/b]: explained\n[/list]\n"
    );
}

#[test]
fn test_source_block_keeps_trailing_newline() {
    assert_eq!(
        export(&BbcodeFormat, &source_block("elisp", "(car x)\n")),
        "[code=lisp](car x)\n[/code]\n"
    );
}

#[test]
fn test_unknown_footnote_aborts_whole_export() {
    let tree = document(vec![
        paragraph(vec![text("fine")]),
        paragraph(vec![footnote_ref("nowhere")]),
    ]);
    assert_eq!(
        try_export(&tree).unwrap_err(),
        FormatError::Transcode(TranscodeError::UnknownFootnote("nowhere".to_string()))
    );
}

#[test]
fn test_hidden_subtrees_dropped_when_visible_only() {
    let tree = document(vec![
        paragraph(vec![text("shown")]),
        headline(1, "Private", vec![]).with_property("hidden", true),
    ]);
    let options = ExportOptions::default().with_visible_only(true);
    assert_eq!(BbcodeFormat.serialize(&tree, &options).unwrap(), "shown\n\n");
    assert!(export(&BbcodeFormat, &tree).contains("# Private"));
}

#[test]
fn test_kitchensink() {
    let out = export(&BbcodeFormat, &kitchensink());
    assert_snapshot!(out, @r###"
[b][u]# Post title[/u][/b]

Intro with [b]bold[/b] and [font=monospace]x < y[/font].

[b][u]+++ Details[/u][/b]

[list]
[*]first
[*]second
[/list]
[code=bash]echo hi
[/code]
[url=https://example.com/]site[/url] and note^1

[b][u]# Footnotes[/u][/b]

^1: A note.
"###);
}

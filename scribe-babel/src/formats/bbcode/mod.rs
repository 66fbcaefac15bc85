//! BBCode format implementation
//!
//! Renders document trees as forum BBCode. The dialect has no paragraph or
//! heading tags: paragraphs are separated by blank lines, and headlines are
//! emphasized lines whose marker encodes the outline level.
//!
//! # Element Mapping Table
//!
//! | Node kind           | BBCode                                    | Notes                                  |
//! |---------------------|-------------------------------------------|----------------------------------------|
//! | Headline (0-5)      | `[b][u]== Title[/u][/b]`                  | Marker per level, deeper levels fail   |
//! | Section / Paragraph | trimmed contents + blank line             |                                        |
//! | Bold / Italic       | `[b]` / `[i]`                             |                                        |
//! | Underline / Strike  | `[u]` / `[s]`                             |                                        |
//! | Code / Verbatim     | `[font=monospace]`                        | Literal value                          |
//! | SourceBlock         | `[code=L]`                                | Source kept as is                      |
//! | QuoteBlock          | `[quote]`                                 |                                        |
//! | Link                | `[url=url]`                               | `todo` links become `[abbr=...]`       |
//! | List                | `[list]` / `[list=1]`                     | Descriptive items lead with `[b]term[/b]: ` |
//! | Item                | `[*]`                                     |                                        |
//! | Table / Row / Cell  | `[table]` / `[tr]` / `[td]`               |                                        |
//! | FootnoteReference   | `^N`                                      | Definitions listed after the body      |
//! | LineBreak           | newline                                   |                                        |
//! | HorizontalRule      | `[hr]`                                    |                                        |
//!
//! Text is emitted without escaping; `[` and `]` in link targets are
//! percent-encoded so they cannot end the `[url=...]` tag. Keywords, comments,
//! planning lines, property drawers, timestamps and footnote definitions are
//! dropped.
//!
//! A post body has no enclosing tag, so the profile uses
//! [`DocumentTemplate::Bare`] and `body_only` leaves the output unchanged.

use crate::common::languages::LanguageMap;
use crate::common::tags::{TagSpec, TagSyntax};
use crate::format::Format;
use crate::ir::nodes::NodeKind;
use crate::profile::{
    BlockStyle, DocumentTemplate, FootnoteStyle, HeadlineStyle, InlineTags, ItemStyle,
    LanguageBinding, LinkStyle, ListKind, ListStyle, Policy, ProfileData, RenderingProfile,
    SourceBlockStyle, TableStyle, TextStyle, UrlTag,
};
use crate::rules::{blocks, footnotes, headline, inline, links, lists};
use once_cell::sync::Lazy;

/// Headline markers indexed by level.
const HEADLINE_MARKERS: &[&str] = &["", "# ", "== ", "+++ ", ":::: ", "----- "];

/// The BBCode rendering profile.
pub static BBCODE_PROFILE: Lazy<RenderingProfile> = Lazy::new(|| {
    RenderingProfile::new(
        ProfileData {
            name: "bbcode",
            syntax: TagSyntax::Bracket,
            text: TextStyle::Raw,
            inline: InlineTags {
                bold: TagSpec::Plain("b"),
                italic: TagSpec::Plain("i"),
                underline: TagSpec::Plain("u"),
                strike_through: TagSpec::Plain("s"),
                monospace: TagSpec::Value("font", "monospace"),
            },
            headlines: HeadlineStyle::Marked {
                markers: HEADLINE_MARKERS,
                emphasis: TagSpec::Plain("b"),
                underline: TagSpec::Plain("u"),
            },
            paragraph: BlockStyle::bare("\n\n"),
            section: BlockStyle::bare("\n\n"),
            quote: BlockStyle::tagged(TagSpec::Plain("quote"), "\n"),
            rule: "hr",
            line_break: Some("\n"),
            source: SourceBlockStyle {
                tag: "code",
                language: LanguageBinding::Value,
                languages: LanguageMap::default(),
                strip_trailing_newline: false,
                suffix: "\n",
            },
            links: LinkStyle {
                anchor: UrlTag::Value("url"),
                placeholder_type: "todo",
                placeholder: TagSpec::Value("abbr", "Article forthcoming"),
                internal_type: "fuzzy",
                internal_prefix: "#",
            },
            lists: ListStyle {
                kinds: &[
                    (ListKind::Unordered, TagSpec::Plain("list")),
                    (ListKind::Ordered, TagSpec::Value("list", "1")),
                    (ListKind::Descriptive, TagSpec::Plain("list")),
                ],
                item: ItemStyle::Bulleted("[*]"),
                term: TagSpec::Plain("b"),
                term_separator: ": ",
            },
            tables: TableStyle {
                table: BlockStyle::tagged(TagSpec::Plain("table"), "\n"),
                row: BlockStyle::tagged(TagSpec::Plain("tr"), "\n"),
                cell: BlockStyle::tagged(TagSpec::Plain("td"), ""),
            },
            footnotes: FootnoteStyle {
                title: "Footnotes",
                level: 1,
            },
            template: DocumentTemplate::Bare,
        },
        &[
            (NodeKind::Document, Policy::Handle(blocks::document)),
            (NodeKind::Headline, Policy::Handle(headline::headline)),
            (NodeKind::Section, Policy::Handle(blocks::section)),
            (NodeKind::Paragraph, Policy::Handle(blocks::paragraph)),
            (NodeKind::Bold, Policy::Handle(inline::bold)),
            (NodeKind::Italic, Policy::Handle(inline::italic)),
            (NodeKind::Underline, Policy::Handle(inline::underline)),
            (NodeKind::StrikeThrough, Policy::Handle(inline::strike_through)),
            (NodeKind::Code, Policy::Handle(inline::monospace)),
            (NodeKind::Verbatim, Policy::Handle(inline::monospace)),
            (NodeKind::SourceBlock, Policy::Handle(blocks::source_block)),
            (NodeKind::QuoteBlock, Policy::Handle(blocks::quote_block)),
            (NodeKind::Link, Policy::Handle(links::link)),
            (NodeKind::List, Policy::Handle(lists::list)),
            (NodeKind::Item, Policy::Handle(lists::item)),
            (NodeKind::Table, Policy::Handle(blocks::table)),
            (NodeKind::TableRow, Policy::Handle(blocks::table_row)),
            (NodeKind::TableCell, Policy::Handle(blocks::table_cell)),
            (
                NodeKind::FootnoteReference,
                Policy::Handle(footnotes::footnote_reference),
            ),
            (NodeKind::LineBreak, Policy::Handle(blocks::line_break)),
            (NodeKind::HorizontalRule, Policy::Handle(blocks::horizontal_rule)),
            (NodeKind::Keyword, Policy::Skip),
            (NodeKind::Comment, Policy::Skip),
            (NodeKind::Planning, Policy::Skip),
            (NodeKind::PropertyDrawer, Policy::Skip),
            (NodeKind::Timestamp, Policy::Skip),
            (NodeKind::FootnoteDefinition, Policy::Skip),
        ],
    )
});

/// Format implementation for forum BBCode
#[derive(Debug, Default, Clone, Copy)]
pub struct BbcodeFormat;

impl Format for BbcodeFormat {
    fn name(&self) -> &str {
        "bbcode"
    }

    fn description(&self) -> &str {
        "Forum BBCode"
    }

    fn file_extensions(&self) -> &[&str] {
        &["bbcode", "bb"]
    }

    fn profile(&self) -> &RenderingProfile {
        &BBCODE_PROFILE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::nodes::Node;
    use crate::ir::options::ExportOptions;

    #[test]
    fn test_text_is_not_escaped() {
        let tree = Node::new(NodeKind::Paragraph).with_child(Node::text("a < b & c"));
        let out = BbcodeFormat
            .serialize(&tree, &ExportOptions::default())
            .unwrap();
        assert_eq!(out, "a < b & c\n\n");
    }

    #[test]
    fn test_metadata_kinds_are_dropped() {
        let tree = Node::new(NodeKind::Section).with_children(vec![
            Node::new(NodeKind::Planning).with_child(Node::text("SCHEDULED")),
            Node::new(NodeKind::PropertyDrawer),
            Node::new(NodeKind::Paragraph).with_children(vec![
                Node::new(NodeKind::Timestamp).with_child(Node::text("<2024-01-01>")),
                Node::text("body"),
            ]),
        ]);
        let out = BbcodeFormat
            .serialize(&tree, &ExportOptions::default())
            .unwrap();
        assert_eq!(out, "body\n\n");
    }
}

//! HTML format implementation
//!
//! Renders document trees as HTML fragments for blog engines that accept raw
//! markup with a few plugin conventions: top-level outline headings become
//! comments the engine reads as post metadata, and code blocks carry their
//! language in a `lang` attribute for the highlighter.
//!
//! # Element Mapping Table
//!
//! | Node kind           | HTML                                      | Notes                                  |
//! |---------------------|-------------------------------------------|----------------------------------------|
//! | Headline (1-2)      | `<!--  Title  -->`                        | Outline levels become comments         |
//! | Headline (3-5)      | `<hN>Title</hN>`                          | Deeper levels fail                     |
//! | Section             | trimmed contents                          | Paragraphs carry their own tag         |
//! | Paragraph           | `<p>`                                     |                                        |
//! | Bold / Italic       | `<strong>` / `<em>`                       |                                        |
//! | Underline / Strike  | `<u>` / `<del>`                           |                                        |
//! | Code / Verbatim     | `<code>`                                  | Literal value, escaped                 |
//! | SourceBlock         | `<pre lang="L">`                          | One trailing newline stripped          |
//! | QuoteBlock          | `<blockquote>`                            |                                        |
//! | Link                | `<a href="url">`                          | `todo` links become `<abbr>`           |
//! | List / Item         | `<ul>` / `<li>`                           | Only unordered lists                   |
//! | Table / Row / Cell  | `<table>` / `<tr>` / `<td>`               |                                        |
//! | FootnoteReference   | `^N`                                      | Definitions listed after the body      |
//! | HorizontalRule      | `<hr />`                                  |                                        |
//!
//! Keywords, comments and footnote definitions are dropped. Every other kind
//! (line breaks and planning lines among them) fails the export.
//!
//! The output is a fragment pasted into a post, so the profile has no document
//! wrapper ([`DocumentTemplate::Bare`]) and `body_only` leaves it unchanged.

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

/// The HTML rendering profile.
pub static HTML_PROFILE: Lazy<RenderingProfile> = Lazy::new(|| {
    RenderingProfile::new(
        ProfileData {
            name: "html",
            syntax: TagSyntax::Angle,
            text: TextStyle::EscapeMarkup,
            inline: InlineTags {
                bold: TagSpec::Plain("strong"),
                italic: TagSpec::Plain("em"),
                underline: TagSpec::Plain("u"),
                strike_through: TagSpec::Plain("del"),
                monospace: TagSpec::Plain("code"),
            },
            headlines: HeadlineStyle::Outline {
                comment_through: 2,
                max_level: 5,
            },
            paragraph: BlockStyle::tagged(TagSpec::Plain("p"), "\n"),
            section: BlockStyle::bare("\n"),
            quote: BlockStyle::tagged(TagSpec::Plain("blockquote"), "\n"),
            rule: "hr",
            line_break: None,
            source: SourceBlockStyle {
                tag: "pre",
                language: LanguageBinding::Attribute("lang"),
                languages: LanguageMap::default(),
                strip_trailing_newline: true,
                suffix: "\n",
            },
            links: LinkStyle {
                anchor: UrlTag::Attribute("a", "href"),
                placeholder_type: "todo",
                placeholder: TagSpec::Attrs("abbr", &[("title", "Article forthcoming")]),
                internal_type: "fuzzy",
                internal_prefix: "#",
            },
            lists: ListStyle {
                kinds: &[(ListKind::Unordered, TagSpec::Plain("ul"))],
                item: ItemStyle::Wrapped(TagSpec::Plain("li")),
                term: TagSpec::Plain("strong"),
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
            (NodeKind::HorizontalRule, Policy::Handle(blocks::horizontal_rule)),
            (NodeKind::Keyword, Policy::Skip),
            (NodeKind::Comment, Policy::Skip),
            (NodeKind::FootnoteDefinition, Policy::Skip),
        ],
    )
});

/// Format implementation for HTML fragments
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment for blog engines"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn profile(&self) -> &RenderingProfile {
        &HTML_PROFILE
    }
}

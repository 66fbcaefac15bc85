//! Rendering profiles: everything that differs between target dialects.
//!
//! A profile is plain data plus a node-kind table. Each entry of the table is
//! a [`Policy`]: render with a handler, drop silently, or fail the export.
//! Kinds with no entry fail. Adding a dialect means writing a new profile, not
//! branching inside the handlers.

use crate::common::languages::LanguageMap;
use crate::common::links::encode_value_url;
use crate::common::tags::{TagSpec, TagSyntax};
use crate::engine::RunContext;
use crate::error::TranscodeError;
use crate::ir::nodes::{Node, NodeKind};
use std::collections::HashMap;
use std::fmt;

/// Renders one node from its already-rendered `contents`.
pub type Handler =
    for<'a> fn(&'a Node, &str, &mut RunContext<'a>) -> Result<String, TranscodeError>;

/// What the engine does with a node kind.
#[derive(Clone, Copy)]
pub enum Policy {
    /// Abort the export with [`TranscodeError::UnsupportedNodeKind`].
    Fail,
    /// Render nothing, without error.
    Skip,
    /// Render with the handler.
    Handle(Handler),
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fail => f.write_str("Fail"),
            Policy::Skip => f.write_str("Skip"),
            Policy::Handle(_) => f.write_str("Handle(..)"),
        }
    }
}

/// How plain text is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Escape `&`, `<` and `>`
    EscapeMarkup,
    /// Emit as is
    Raw,
}

impl TextStyle {
    pub fn render(&self, text: &str) -> String {
        match self {
            TextStyle::EscapeMarkup => text
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;"),
            TextStyle::Raw => text.to_string(),
        }
    }
}

/// Headline rendering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlineStyle {
    /// Levels up to `comment_through` become a comment holding the title,
    /// deeper levels up to `max_level` a `<hN>` heading.
    Outline {
        comment_through: i64,
        max_level: usize,
    },
    /// Every level is an emphasized, underlined line led by the level's
    /// marker. The table index is the level.
    Marked {
        markers: &'static [&'static str],
        emphasis: TagSpec,
        underline: TagSpec,
    },
}

/// A block-level wrapper: optional tag around trimmed contents plus a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStyle {
    pub tag: Option<TagSpec>,
    pub suffix: &'static str,
}

impl BlockStyle {
    pub const fn tagged(tag: TagSpec, suffix: &'static str) -> Self {
        Self {
            tag: Some(tag),
            suffix,
        }
    }

    pub const fn bare(suffix: &'static str) -> Self {
        Self { tag: None, suffix }
    }
}

/// The kinds a list node can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Unordered,
    Ordered,
    Descriptive,
}

impl ListKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "unordered" => Some(ListKind::Unordered),
            "ordered" => Some(ListKind::Ordered),
            "descriptive" => Some(ListKind::Descriptive),
            _ => None,
        }
    }
}

/// How list items are introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStyle {
    /// `<li>body</li>`
    Wrapped(TagSpec),
    /// `[*]body`
    Bulleted(&'static str),
}

/// List rendering rules: one wrapper per supported kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyle {
    pub kinds: &'static [(ListKind, TagSpec)],
    pub item: ItemStyle,
    /// Wraps the term of a descriptive item
    pub term: TagSpec,
    pub term_separator: &'static str,
}

impl ListStyle {
    pub fn tag_for(&self, kind: ListKind) -> Option<TagSpec> {
        self.kinds
            .iter()
            .find(|(supported, _)| *supported == kind)
            .map(|(_, tag)| *tag)
    }
}

/// How a URL is attached to an anchor tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlTag {
    /// `<a href="url">`
    Attribute(&'static str, &'static str),
    /// `[url=url]`
    Value(&'static str),
}

impl UrlTag {
    pub fn render(&self, syntax: TagSyntax, url: &str, content: &str) -> String {
        match self {
            UrlTag::Attribute(tag, attr) => syntax.wrap(tag, content, &[(attr, url)]),
            UrlTag::Value(tag) => syntax.wrap_value(tag, &encode_value_url(url), content),
        }
    }
}

/// Link rendering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkStyle {
    pub anchor: UrlTag,
    /// Link type meaning "article forthcoming"
    pub placeholder_type: &'static str,
    pub placeholder: TagSpec,
    /// Link type for references inside the document
    pub internal_type: &'static str,
    /// The one raw-target prefix accepted under `internal_type`
    pub internal_prefix: &'static str,
}

/// How the block language is attached to the source block tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageBinding {
    /// `<pre lang="bash">`
    Attribute(&'static str),
    /// `[code=bash]`
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceBlockStyle {
    pub tag: &'static str,
    pub language: LanguageBinding,
    pub languages: LanguageMap,
    pub strip_trailing_newline: bool,
    pub suffix: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyle {
    pub table: BlockStyle,
    pub row: BlockStyle,
    pub cell: BlockStyle,
}

/// The synthetic section listing footnote definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FootnoteStyle {
    pub title: &'static str,
    pub level: i64,
}

/// The outer template applied to the finished body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentTemplate {
    /// Body returned untouched
    Bare,
    /// Body wrapped in a tag, followed by a newline
    Wrap(TagSpec),
}

/// Tags for inline markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineTags {
    pub bold: TagSpec,
    pub italic: TagSpec,
    pub underline: TagSpec,
    pub strike_through: TagSpec,
    pub monospace: TagSpec,
}

/// One target dialect.
#[derive(Debug, Clone)]
pub struct RenderingProfile {
    pub name: &'static str,
    pub syntax: TagSyntax,
    pub text: TextStyle,
    pub inline: InlineTags,
    pub headlines: HeadlineStyle,
    pub paragraph: BlockStyle,
    pub section: BlockStyle,
    pub quote: BlockStyle,
    pub rule: &'static str,
    pub line_break: Option<&'static str>,
    pub source: SourceBlockStyle,
    pub links: LinkStyle,
    pub lists: ListStyle,
    pub tables: TableStyle,
    pub footnotes: FootnoteStyle,
    pub template: DocumentTemplate,
    policies: HashMap<NodeKind, Policy>,
}

impl RenderingProfile {
    /// Builds a profile from its data and node-kind table.
    ///
    /// `PlainText` never goes through the table: the engine renders it with
    /// [`RenderingProfile::text`] directly.
    pub fn new(data: ProfileData, policies: &[(NodeKind, Policy)]) -> Self {
        let ProfileData {
            name,
            syntax,
            text,
            inline,
            headlines,
            paragraph,
            section,
            quote,
            rule,
            line_break,
            source,
            links,
            lists,
            tables,
            footnotes,
            template,
        } = data;
        Self {
            name,
            syntax,
            text,
            inline,
            headlines,
            paragraph,
            section,
            quote,
            rule,
            line_break,
            source,
            links,
            lists,
            tables,
            footnotes,
            template,
            policies: policies.iter().copied().collect(),
        }
    }

    /// The policy for `kind`; kinds without an entry fail.
    pub fn policy(&self, kind: NodeKind) -> Policy {
        self.policies.get(&kind).copied().unwrap_or(Policy::Fail)
    }

    /// Replaces the policy for `kind`.
    pub fn with_policy(mut self, kind: NodeKind, policy: Policy) -> Self {
        self.policies.insert(kind, policy);
        self
    }

    pub fn with_template(mut self, template: DocumentTemplate) -> Self {
        self.template = template;
        self
    }
}

/// Everything in a profile except its node-kind table.
#[derive(Debug, Clone, Copy)]
pub struct ProfileData {
    pub name: &'static str,
    pub syntax: TagSyntax,
    pub text: TextStyle,
    pub inline: InlineTags,
    pub headlines: HeadlineStyle,
    pub paragraph: BlockStyle,
    pub section: BlockStyle,
    pub quote: BlockStyle,
    pub rule: &'static str,
    pub line_break: Option<&'static str>,
    pub source: SourceBlockStyle,
    pub links: LinkStyle,
    pub lists: ListStyle,
    pub tables: TableStyle,
    pub footnotes: FootnoteStyle,
    pub template: DocumentTemplate,
}

//! The transcoding engine.
//!
//! Rendering is a post-order fold over the tree: a node's children are
//! rendered first, in document order, and concatenated into `contents`; then
//! the profile's policy for the node's kind decides what becomes of it.
//!
//! Nodes stored in properties (a headline's `title`, a descriptive item's
//! `tag`) are rendered before the children so footnote ids keep following
//! document order. Handlers read them back through [`RunContext::secondary`].
//!
//! Two template steps run after the root:
//!
//! - inner: the footnote section is appended to the body
//! - outer: the profile's [`DocumentTemplate`] wraps or keeps the body
//!
//! All mutable state lives in the [`RunContext`] built for one call; nothing
//! survives between runs.

use crate::common::footnotes::{collect_definitions, FootnoteDefinitions, FootnoteRegistry};
use crate::error::TranscodeError;
use crate::ir::nodes::{Node, NodeKind};
use crate::ir::options::ExportOptions;
use crate::profile::{DocumentTemplate, ListKind, Policy, RenderingProfile};
use crate::rules;
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// Context inherited from the enclosing nodes.
///
/// Handlers never look upward in the tree; what they need to know about their
/// parents is passed down here instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scope {
    /// Kind of the innermost enclosing list
    pub list_kind: Option<ListKind>,
}

/// State for one transcoding run.
pub struct RunContext<'a> {
    pub options: &'a ExportOptions,
    pub profile: &'a RenderingProfile,
    pub footnotes: FootnoteRegistry,
    definitions: FootnoteDefinitions<'a>,
    scope: Scope,
    secondary: BTreeMap<&'a str, String>,
}

impl<'a> RunContext<'a> {
    pub fn new(tree: &'a Node, options: &'a ExportOptions, profile: &'a RenderingProfile) -> Self {
        Self {
            options,
            profile,
            footnotes: FootnoteRegistry::new(),
            definitions: collect_definitions(tree),
            scope: Scope::default(),
            secondary: BTreeMap::new(),
        }
    }

    /// Scope of the node whose handler is running.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// The footnote definition registered under `label`.
    pub fn definition(&self, label: &str) -> Option<&'a Node> {
        self.definitions.get(label).copied()
    }

    /// Rendered node-valued property `name` of the node whose handler is running.
    pub fn secondary(&self, name: &str) -> Option<&str> {
        self.secondary.get(name).map(String::as_str)
    }

    /// Property `name` as rendered text: node-valued properties come from
    /// [`RunContext::secondary`], string properties go through the text style.
    pub fn secondary_text(&self, node: &Node, name: &str) -> Option<String> {
        match self.secondary(name) {
            Some(rendered) => Some(rendered.to_string()),
            None => node
                .str_property(name)
                .map(|text| self.profile.text.render(text)),
        }
    }

    /// Renders `node` and its subtree.
    pub fn transcode(&mut self, node: &'a Node) -> Result<String, TranscodeError> {
        if self.options.visible_only && node.bool_property("hidden") {
            trace!(kind = %node.kind, "skipping hidden node");
            return Ok(String::new());
        }

        if node.kind == NodeKind::PlainText {
            let text = node.str_property("value").unwrap_or_default();
            return Ok(self.profile.text.render(text));
        }

        let handler = match self.profile.policy(node.kind) {
            Policy::Handle(handler) => handler,
            Policy::Skip => {
                trace!(kind = %node.kind, profile = self.profile.name, "ignoring node");
                return Ok(String::new());
            }
            Policy::Fail => {
                return Err(TranscodeError::UnsupportedNodeKind {
                    kind: node.kind,
                    profile: self.profile.name.to_string(),
                })
            }
        };

        let secondary = self.render_secondary(node)?;

        let parent_scope = self.scope;
        if node.kind == NodeKind::List {
            self.scope = Scope {
                list_kind: node.str_property("kind").and_then(ListKind::parse),
            };
        }
        let contents = self.transcode_all(&node.children);
        self.scope = parent_scope;
        let contents = contents?;

        let outer = std::mem::replace(&mut self.secondary, secondary);
        let fragment = handler(node, &contents, self);
        self.secondary = outer;
        fragment
    }

    /// Renders `nodes` in order and concatenates the fragments.
    pub fn transcode_all(&mut self, nodes: &'a [Node]) -> Result<String, TranscodeError> {
        let mut out = String::new();
        for node in nodes {
            out.push_str(&self.transcode(node)?);
        }
        Ok(out)
    }

    fn render_secondary(
        &mut self,
        node: &'a Node,
    ) -> Result<BTreeMap<&'a str, String>, TranscodeError> {
        let mut rendered = BTreeMap::new();
        for name in leading_properties(node, self.scope) {
            if let Some(nodes) = node.nodes_property(name) {
                rendered.insert(*name, self.transcode_all(nodes)?);
            }
        }
        Ok(rendered)
    }
}

/// Node-valued properties the handler for `node` reads. Nothing else stored
/// in properties is rendered, so it cannot claim footnote ids or fail the run.
fn leading_properties(node: &Node, scope: Scope) -> &'static [&'static str] {
    match node.kind {
        NodeKind::Headline if !node.bool_property("footnote_section") => &["title"],
        NodeKind::Item if scope.list_kind == Some(ListKind::Descriptive) => &["tag"],
        _ => &[],
    }
}

/// Renders `tree` into the dialect described by `profile`.
///
/// Any fatal handler error aborts the whole run; no partial output escapes.
pub fn transcode(
    tree: &Node,
    options: &ExportOptions,
    profile: &RenderingProfile,
) -> Result<String, TranscodeError> {
    debug!(profile = profile.name, root = %tree.kind, "transcoding document");

    let mut ctx = RunContext::new(tree, options, profile);
    let result = ctx
        .transcode(tree)
        .and_then(|body| inner_template(body, &ctx))
        .map(|body| outer_template(body, &ctx));

    match &result {
        Ok(_) => debug!(
            profile = profile.name,
            footnotes = ctx.footnotes.len(),
            "transcode finished"
        ),
        Err(err) => warn!(profile = profile.name, error = %err, "transcode failed"),
    }
    result
}

fn inner_template(mut body: String, ctx: &RunContext<'_>) -> Result<String, TranscodeError> {
    body.push_str(&rules::footnotes::footnote_section(ctx)?);
    Ok(body)
}

fn outer_template(body: String, ctx: &RunContext<'_>) -> String {
    match ctx.profile.template {
        DocumentTemplate::Wrap(tag) if !ctx.options.body_only => {
            format!("{}\n", tag.render(ctx.profile.syntax, &body))
        }
        _ => body,
    }
}

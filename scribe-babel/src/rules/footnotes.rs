//! Footnote references and the footnote section.

use super::headline::title_line;
use crate::engine::RunContext;
use crate::error::TranscodeError;
use crate::ir::nodes::Node;
use tracing::trace;

/// Emits `^N ` for a reference, numbering labels by first reference.
///
/// The definition body is rendered the first time its label is seen. Its id
/// is assigned before that, so references nested inside a definition get
/// later ids than the definition they appear in.
pub fn footnote_reference<'a>(
    node: &'a Node,
    _contents: &str,
    ctx: &mut RunContext<'a>,
) -> Result<String, TranscodeError> {
    if node.bool_property("inline") || !node.children.is_empty() {
        let label = node.str_property("label").unwrap_or_default();
        return Err(TranscodeError::InlineFootnote(label.to_string()));
    }

    let label = node.require_str("label")?;
    if let Some(id) = ctx.footnotes.lookup(label) {
        return Ok(format!("^{id} "));
    }

    let definition = ctx
        .definition(label)
        .ok_or_else(|| TranscodeError::UnknownFootnote(label.to_string()))?;
    let (id, _) = ctx.footnotes.assign(label);
    trace!(label, id, "footnote assigned");

    let body = ctx.transcode_all(&definition.children)?;
    ctx.footnotes.define(id, &body);
    Ok(format!("^{id} "))
}

/// The footnote section appended after the body; empty without references.
pub fn footnote_section(ctx: &RunContext<'_>) -> Result<String, TranscodeError> {
    if ctx.footnotes.is_empty() {
        return Ok(String::new());
    }

    let style = ctx.profile.footnotes;
    let mut out = title_line(
        ctx.profile,
        style.level,
        &ctx.profile.text.render(style.title),
    )?;
    for (id, text) in ctx.footnotes.entries() {
        out.push_str(&format!("^{id}: {text}\n"));
    }
    Ok(out)
}

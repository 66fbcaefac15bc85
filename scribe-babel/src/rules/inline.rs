//! Inline markup: emphasis tags and monospace literals.

use crate::engine::RunContext;
use crate::error::TranscodeError;
use crate::ir::nodes::Node;

pub fn bold(
    _node: &Node,
    contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    Ok(ctx.profile.inline.bold.render(ctx.profile.syntax, contents))
}

pub fn italic(
    _node: &Node,
    contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    Ok(ctx.profile.inline.italic.render(ctx.profile.syntax, contents))
}

pub fn underline(
    _node: &Node,
    contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    Ok(ctx.profile.inline.underline.render(ctx.profile.syntax, contents))
}

pub fn strike_through(
    _node: &Node,
    contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    Ok(ctx
        .profile
        .inline
        .strike_through
        .render(ctx.profile.syntax, contents))
}

/// Inline code and verbatim. These are leaves: the literal `value` is
/// rendered, never `contents`.
pub fn monospace(
    node: &Node,
    _contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    let value = ctx.profile.text.render(node.require_str("value")?);
    Ok(ctx.profile.inline.monospace.render(ctx.profile.syntax, &value))
}

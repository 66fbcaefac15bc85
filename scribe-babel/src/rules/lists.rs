//! Lists and their items.

use crate::engine::RunContext;
use crate::error::TranscodeError;
use crate::ir::nodes::Node;
use crate::profile::{ItemStyle, ListKind};

/// Wraps the items in the tag the profile declares for the list's kind.
///
/// Kinds the profile does not declare are fatal.
pub fn list(
    node: &Node,
    contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    let kind = node.require_str("kind")?;
    let unsupported = || TranscodeError::UnsupportedListKind {
        kind: kind.to_string(),
        profile: ctx.profile.name.to_string(),
    };

    let tag = ListKind::parse(kind)
        .and_then(|parsed| ctx.profile.lists.tag_for(parsed))
        .ok_or_else(unsupported)?;

    Ok(format!(
        "{}\n",
        tag.render(ctx.profile.syntax, &format!("\n{contents}"))
    ))
}

/// One item line. Items of descriptive lists lead with their term.
pub fn item(
    node: &Node,
    contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    let style = ctx.profile.lists;
    let mut body = String::new();

    if ctx.scope().list_kind == Some(ListKind::Descriptive) {
        let term = ctx.secondary_text(node, "tag").unwrap_or_default();
        body.push_str(&style.term.render(ctx.profile.syntax, term.trim()));
        body.push_str(style.term_separator);
    }
    body.push_str(contents.trim());

    let line = match style.item {
        ItemStyle::Wrapped(tag) => tag.render(ctx.profile.syntax, &body),
        ItemStyle::Bulleted(bullet) => format!("{bullet}{body}"),
    };
    Ok(format!("{line}\n"))
}

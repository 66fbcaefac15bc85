//! Block-level nodes: paragraphs, sections, quotes, source blocks, tables.

use super::render_block;
use crate::engine::RunContext;
use crate::error::TranscodeError;
use crate::ir::nodes::Node;
use crate::profile::LanguageBinding;

/// The root passes its contents through; templates run afterwards.
pub fn document(
    _node: &Node,
    contents: &str,
    _ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    Ok(contents.to_string())
}

pub fn paragraph(
    _node: &Node,
    contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    Ok(render_block(&ctx.profile.paragraph, ctx.profile.syntax, contents))
}

pub fn section(
    _node: &Node,
    contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    Ok(render_block(&ctx.profile.section, ctx.profile.syntax, contents))
}

pub fn quote_block(
    _node: &Node,
    contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    Ok(render_block(&ctx.profile.quote, ctx.profile.syntax, contents))
}

pub fn horizontal_rule(
    _node: &Node,
    _contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    Ok(format!("{}\n", ctx.profile.syntax.void(ctx.profile.rule)))
}

pub fn line_break(
    node: &Node,
    _contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    ctx.profile
        .line_break
        .map(str::to_string)
        .ok_or_else(|| TranscodeError::UnsupportedNodeKind {
            kind: node.kind,
            profile: ctx.profile.name.to_string(),
        })
}

/// Wraps the block's formatted source in the profile's language-aware tag.
pub fn source_block(
    node: &Node,
    _contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    let profile = ctx.profile;
    let style = &profile.source;

    let mut code = node.require_str("value")?;
    if style.strip_trailing_newline {
        code = code.strip_suffix('\n').unwrap_or(code);
    }
    let language = style.languages.resolve(node.str_property("language"));

    let block = match style.language {
        LanguageBinding::Attribute(attr) => profile.syntax.wrap(style.tag, code, &[(attr, language)]),
        LanguageBinding::Value => profile.syntax.wrap_value(style.tag, language, code),
    };
    Ok(format!("{block}{}", style.suffix))
}

pub fn table(
    _node: &Node,
    contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    let style = ctx.profile.tables.table;
    if contents.trim().is_empty() {
        return Ok(String::new());
    }
    let body = format!("\n{contents}");
    let mut out = match style.tag {
        Some(tag) => tag.render(ctx.profile.syntax, &body),
        None => body,
    };
    out.push_str(style.suffix);
    Ok(out)
}

/// Rows without cells render as nothing at all.
pub fn table_row(
    _node: &Node,
    contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    Ok(render_block(&ctx.profile.tables.row, ctx.profile.syntax, contents))
}

/// Cells keep their tag even when empty so columns stay aligned.
pub fn table_cell(
    _node: &Node,
    contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    let style = ctx.profile.tables.cell;
    let trimmed = contents.trim();
    let mut out = match style.tag {
        Some(tag) => tag.render(ctx.profile.syntax, trimmed),
        None => trimmed.to_string(),
    };
    out.push_str(style.suffix);
    Ok(out)
}

//! Headline leveling.
//!
//! The level is relative nesting depth, computed by the parser and stored in
//! the `level` property. What a level turns into comes from the profile's
//! [`HeadlineStyle`]; levels outside its table are fatal.

use crate::engine::RunContext;
use crate::error::TranscodeError;
use crate::ir::nodes::Node;
use crate::profile::{HeadlineStyle, RenderingProfile};

pub fn headline<'a>(
    node: &'a Node,
    contents: &str,
    ctx: &mut RunContext<'a>,
) -> Result<String, TranscodeError> {
    // The footnote section is assembled by the engine, not from the tree.
    if node.bool_property("footnote_section") {
        return Ok(String::new());
    }

    let level = node.require_int("level")?;
    let title = ctx.secondary_text(node, "title").unwrap_or_default();

    let mut out = title_line(ctx.profile, level, title.trim())?;
    out.push_str(contents);
    Ok(out)
}

/// The line a headline of `level` titled `title` renders as.
pub fn title_line(
    profile: &RenderingProfile,
    level: i64,
    title: &str,
) -> Result<String, TranscodeError> {
    match profile.headlines {
        HeadlineStyle::Outline {
            comment_through,
            max_level,
        } => {
            if level <= comment_through {
                Ok(format!("<!--  {title}  -->\n"))
            } else if level <= max_level as i64 {
                let tag = format!("h{level}");
                Ok(format!("{}\n", profile.syntax.wrap(&tag, title, &[])))
            } else {
                Err(TranscodeError::HeadlineLevelOutOfRange {
                    level,
                    max: max_level,
                    profile: profile.name.to_string(),
                })
            }
        }
        HeadlineStyle::Marked {
            markers,
            emphasis,
            underline,
        } => {
            let marker = usize::try_from(level)
                .ok()
                .and_then(|index| markers.get(index))
                .ok_or_else(|| TranscodeError::HeadlineLevelOutOfRange {
                    level,
                    max: markers.len().saturating_sub(1),
                    profile: profile.name.to_string(),
                })?;
            let underlined = underline.render(profile.syntax, &format!("{marker}{title}"));
            Ok(format!("{}\n\n", emphasis.render(profile.syntax, &underlined)))
        }
    }
}

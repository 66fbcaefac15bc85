//! Node handlers shared by every profile.
//!
//! Each handler has the [`crate::profile::Handler`] shape: it receives the
//! node, the concatenated fragments of its children and the run context, and
//! reads everything dialect-specific from `ctx.profile`. Profiles pick which
//! handler (if any) a node kind gets.

pub mod blocks;
pub mod footnotes;
pub mod headline;
pub mod inline;
pub mod links;
pub mod lists;

use crate::common::tags::TagSyntax;
use crate::profile::BlockStyle;

/// Trimmed `contents` in the block's tag and suffix; nothing when blank.
pub(crate) fn render_block(style: &BlockStyle, syntax: TagSyntax, contents: &str) -> String {
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let mut out = match style.tag {
        Some(tag) => tag.render(syntax, trimmed),
        None => trimmed.to_string(),
    };
    out.push_str(style.suffix);
    out
}

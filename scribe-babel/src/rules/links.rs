//! Link targets.
//!
//! The link `type` decides the rendering:
//!
//! | type           | rendering                                 |
//! |----------------|-------------------------------------------|
//! | `http`/`https` | URL tag to `type:path`                    |
//! | placeholder    | the profile's "article forthcoming" tag   |
//! | internal       | URL tag to the in-page anchor             |
//! | anything else  | [`TranscodeError::UnsupportedLinkType`]   |

use crate::common::links::encode_url;
use crate::engine::RunContext;
use crate::error::TranscodeError;
use crate::ir::nodes::Node;

pub fn link(
    node: &Node,
    contents: &str,
    ctx: &mut RunContext<'_>,
) -> Result<String, TranscodeError> {
    let profile = ctx.profile;
    let style = profile.links;
    let link_type = node.require_str("type")?;

    let label = |fallback: &str| {
        if contents.trim().is_empty() {
            profile.text.render(fallback)
        } else {
            contents.to_string()
        }
    };

    if link_type == "http" || link_type == "https" {
        let path = node.require_str("path")?;
        let url = encode_url(&format!("{link_type}:{path}"));
        return Ok(style.anchor.render(profile.syntax, &url, &label(&url)));
    }

    if link_type == style.placeholder_type {
        let path = node.str_property("path").unwrap_or_default();
        return Ok(style.placeholder.render(profile.syntax, &label(path)));
    }

    if link_type == style.internal_type {
        let raw = node.require_str("raw_link")?;
        if !raw.starts_with(style.internal_prefix) {
            return Err(TranscodeError::MalformedLinkTarget(raw.to_string()));
        }
        let url = encode_url(raw);
        return Ok(style.anchor.render(profile.syntax, &url, &label(&url)));
    }

    Err(TranscodeError::UnsupportedLinkType(link_type.to_string()))
}

//! Markup export for structured document trees
//!
//!     This crate turns a parsed document tree (produced by an external parser and handed over
//!     as JSON) into a target markup dialect: an HTML fragment for blog engines, or forum BBCode.
//!
//!     TLDR: For dialect authors:
//!         - Handlers never branch on the dialect. Everything that differs lives in a RenderingProfile.
//!         - A new dialect is a new profile plus a Format impl under ./formats/<dialect>/mod.rs.
//!         - Unsupported node kinds are declared, not coded: each kind is handled, skipped or failed.
//!
//! Architecture
//!
//!     The engine (./engine.rs) is a post-order fold: children are rendered first and
//!     concatenated, then the profile's policy for the node's kind decides the fragment.
//!     Per-run state (footnote numbering, the footnote definitions of the tree, the enclosing
//!     list) lives in a RunContext created for each call, so runs never share anything.
//!
//!     This is a pure lib, that is, it powers scribe-cli but is shell agnostic: no code here
//!     prints, reads env vars or touches the filesystem.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── engine.rs               # transcode() and the RunContext
//!     ├── profile.rs              # RenderingProfile and its style types
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── rules                   # Node handlers shared by every profile
//!     ├── formats
//!     │   ├── html/mod.rs         # HTML_PROFILE + HtmlFormat
//!     │   └── bbcode/mod.rs       # BBCODE_PROFILE + BbcodeFormat
//!     ├── ir                      # Node tree and export options
//!     ├── common                  # Tags, URLs, languages, footnote bookkeeping
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithms
//!
//!     Footnotes are the only cross-reference state. Ids are handed out in order of first
//!     reference; the definition is rendered at that moment and listed after the body, in id
//!     order, by the inner template. See ./common/footnotes.rs and ./rules/footnotes.rs.
//!
//!     URL targets go through the `url` crate. In-page anchors are resolved against a throwaway
//!     base and cut back, see ./common/links.rs.
//!
pub mod common;
pub mod engine;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod profile;
pub mod registry;
pub mod rules;

pub use engine::transcode;
pub use error::{FormatError, TranscodeError};
pub use format::{output_extension, Format};
pub use formats::{BbcodeFormat, HtmlFormat};
pub use ir::nodes::{Node, NodeKind, Property};
pub use ir::options::ExportOptions;
pub use profile::RenderingProfile;
pub use registry::FormatRegistry;

/// Reads a document tree from its JSON form.
pub fn read_tree(json: &str) -> Result<Node, FormatError> {
    serde_json::from_str(json).map_err(|err| FormatError::ParseError(err.to_string()))
}

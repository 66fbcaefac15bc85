//! Error types for transcoding and format operations

use crate::ir::nodes::NodeKind;

/// Fatal errors raised while rendering a tree. Any of these aborts the run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranscodeError {
    /// The profile has no handler for this kind and does not ignore it
    #[error("Node kind '{kind}' is not supported by the {profile} profile")]
    UnsupportedNodeKind { kind: NodeKind, profile: String },
    /// The profile cannot render lists of this kind
    #[error("List kind '{kind}' is not supported by the {profile} profile")]
    UnsupportedListKind { kind: String, profile: String },
    /// Link type with no rendering rule
    #[error("Unsupported link type '{0}'")]
    UnsupportedLinkType(String),
    /// Internal link whose raw target does not follow the accepted convention
    #[error("Malformed internal link target '{0}'")]
    MalformedLinkTarget(String),
    /// Headline level outside the profile's level table
    #[error("Headline level {level} exceeds the maximum of {max} for the {profile} profile")]
    HeadlineLevelOutOfRange {
        level: i64,
        max: usize,
        profile: String,
    },
    /// Footnote reference carrying its own inline definition
    #[error("Inline footnote definitions are not supported (label '{0}')")]
    InlineFootnote(String),
    /// Footnote reference with no matching definition in the document
    #[error("No definition found for footnote '{0}'")]
    UnknownFootnote(String),
    /// A property the handler needs is absent or has the wrong type
    #[error("Node kind '{kind}' is missing required property '{property}'")]
    MissingProperty {
        kind: NodeKind,
        property: &'static str,
    },
}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error while reading the serialized tree
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Rendering failed
    #[error("Transcode error: {0}")]
    Transcode(#[from] TranscodeError),
}

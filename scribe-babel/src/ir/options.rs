//! Export options shared by every format.

use serde::{Deserialize, Serialize};

/// Options for one export run. Read-only while transcoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Skip the document template and return the bare body.
    pub body_only: bool,
    /// Drop nodes flagged `hidden` instead of rendering them.
    pub visible_only: bool,
    /// File extension to use instead of the format's default.
    pub extension: Option<String>,
    /// Forwarded to the host's I/O layer; the engine never looks at it.
    pub asynchronous: bool,
}

impl ExportOptions {
    pub fn with_body_only(mut self, body_only: bool) -> Self {
        self.body_only = body_only;
        self
    }

    pub fn with_visible_only(mut self, visible_only: bool) -> Self {
        self.visible_only = visible_only;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }
}

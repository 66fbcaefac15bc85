//! Format trait definition
//!
//! This module defines the Format trait every target dialect implements.
//! A format is a named [`RenderingProfile`] plus the file extensions its
//! output is saved under; serialization always goes through the engine.

use crate::engine::transcode;
use crate::error::FormatError;
use crate::ir::nodes::Node;
use crate::ir::options::ExportOptions;
use crate::profile::RenderingProfile;

/// Trait for output formats
///
/// Implementors provide a name, the extensions their output uses and the
/// profile that drives rendering. Serialization has a default
/// implementation; formats rarely need to override it.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn profile(&self) -> &RenderingProfile {
///         &MY_PROFILE
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "bbcode")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["html", "htm"])
    ///
    /// Returns a slice of file extensions without the leading dot. The first
    /// one is the default output extension.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// The rendering profile for this dialect
    fn profile(&self) -> &RenderingProfile;

    /// Render a document tree into this format
    fn serialize(&self, doc: &Node, options: &ExportOptions) -> Result<String, FormatError> {
        Ok(transcode(doc, options, self.profile())?)
    }
}

/// Extension for an exported file: the options' override, else the format's
/// first extension, else the format name.
pub fn output_extension(options: &ExportOptions, format: &dyn Format) -> String {
    if let Some(extension) = options.extension.as_deref() {
        return extension.trim_start_matches('.').to_string();
    }
    format
        .file_extensions()
        .first()
        .map(|ext| ext.to_string())
        .unwrap_or_else(|| format.name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::tags::TagSpec;
    use crate::formats::html::HTML_PROFILE;
    use crate::formats::{BbcodeFormat, HtmlFormat};
    use crate::ir::nodes::NodeKind;
    use crate::profile::DocumentTemplate;
    use once_cell::sync::Lazy;

    static ARTICLE_PROFILE: Lazy<RenderingProfile> = Lazy::new(|| {
        HTML_PROFILE
            .clone()
            .with_template(DocumentTemplate::Wrap(TagSpec::Plain("article")))
    });

    struct ArticleFormat;

    impl Format for ArticleFormat {
        fn name(&self) -> &str {
            "article"
        }

        fn profile(&self) -> &RenderingProfile {
            &ARTICLE_PROFILE
        }
    }

    struct NamelessFormat;

    impl Format for NamelessFormat {
        fn name(&self) -> &str {
            "plain"
        }

        fn profile(&self) -> &RenderingProfile {
            &crate::formats::html::HTML_PROFILE
        }
    }

    #[test]
    fn test_output_extension_defaults_to_first_extension() {
        let options = ExportOptions::default();
        assert_eq!(output_extension(&options, &HtmlFormat), "html");
        assert_eq!(output_extension(&options, &BbcodeFormat), "bbcode");
        assert_eq!(output_extension(&options, &NamelessFormat), "plain");
    }

    #[test]
    fn test_output_extension_override() {
        let options = ExportOptions::default().with_extension(".txt");
        assert_eq!(output_extension(&options, &BbcodeFormat), "txt");
    }

    #[test]
    fn test_default_serialize_uses_profile() {
        let doc = Node::new(NodeKind::Document)
            .with_child(Node::new(NodeKind::Italic).with_child(Node::text("x")));
        let out = NamelessFormat
            .serialize(&doc, &ExportOptions::default())
            .unwrap();
        assert_eq!(out, "<em>x</em>");
    }

    #[test]
    fn test_serialize_honours_body_only_for_wrapped_profiles() {
        let doc = Node::new(NodeKind::Document)
            .with_child(Node::new(NodeKind::Italic).with_child(Node::text("x")));
        let full = ArticleFormat
            .serialize(&doc, &ExportOptions::default())
            .unwrap();
        assert_eq!(full, "<article><em>x</em></article>\n");

        let body = ArticleFormat
            .serialize(&doc, &ExportOptions::default().with_body_only(true))
            .unwrap();
        assert_eq!(body, "<em>x</em>");
    }

    #[test]
    fn test_serialize_wraps_transcode_errors() {
        let doc = Node::new(NodeKind::Planning);
        let err = HtmlFormat
            .serialize(&doc, &ExportOptions::default())
            .unwrap_err();
        assert!(matches!(err, FormatError::Transcode(_)));
    }
}

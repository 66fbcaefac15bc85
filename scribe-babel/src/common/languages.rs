//! Source block language ids.
//!
//! Block languages are mapped to the ids the target's syntax-highlighting
//! plugin knows. Matching is exact and case-sensitive; unknown names pass
//! through untouched.

/// Aliases shared by the built-in profiles.
pub const STANDARD_ALIASES: &[(&str, &str)] = &[
    ("emacs-lisp", "lisp"),
    ("elisp", "lisp"),
    ("sh", "bash"),
    ("shell", "bash"),
];

/// Maps a block's declared language to a target language id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageMap {
    default: &'static str,
    aliases: &'static [(&'static str, &'static str)],
}

impl LanguageMap {
    pub const fn new(default: &'static str, aliases: &'static [(&'static str, &'static str)]) -> Self {
        Self { default, aliases }
    }

    /// Language id for `language`. Unset or empty yields the default.
    pub fn resolve<'a>(&'a self, language: Option<&'a str>) -> &'a str {
        let language = match language {
            Some(language) if !language.is_empty() => language,
            _ => return self.default,
        };
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == language)
            .map(|(_, id)| *id)
            .unwrap_or(language)
    }
}

impl Default for LanguageMap {
    fn default() -> Self {
        Self::new("plaintext", STANDARD_ALIASES)
    }
}

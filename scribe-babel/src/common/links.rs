//! URL normalization for link targets.
//!
//! Targets handed to URL tags are percent-encoded with the `url` crate.
//! Absolute URLs go through [`Url::parse`]; relative references (including
//! pure in-page anchors like `#intro`) are resolved against a throwaway base
//! and cut back to the part after the origin. That resolution leaves a `/` in
//! front of references that never had one (`#intro` comes back as `/#intro`),
//! so the slash is stripped again before use.
//!
//! `\` in a relative reference is escaped before resolution; the `url` crate
//! would otherwise read it as `/` and take a leading `/\x` for a host.
//!
//! `%` is never escaped, and the result is re-encoded until it stops
//! changing, which keeps the encoding idempotent:
//! `encode_url(&encode_url(u)) == encode_url(u)`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::{ParseError, Position, Url};

/// Base used only to resolve relative references; it never reaches the output.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Upper bound on re-encoding passes; real targets settle after one or two.
const MAX_PASSES: usize = 8;

/// Characters escaped when the `url` crate cannot make sense of the input.
/// Covers everything the `url` crate escapes in paths, queries and fragments.
const FALLBACK_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^');

/// Characters that would end a value-style tag such as `[url=...]` early.
const VALUE_TAG_SET: &AsciiSet = &CONTROLS.add(b'[').add(b']');

/// Percent-encodes a link target for use inside a URL tag.
pub fn encode_url(raw: &str) -> String {
    let mut current = encode_once(raw);
    for _ in 0..MAX_PASSES {
        let next = encode_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Escapes the brackets of an already encoded URL for value-style tags.
pub fn encode_value_url(url: &str) -> String {
    utf8_percent_encode(url, VALUE_TAG_SET).to_string()
}

fn encode_once(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => url.to_string(),
        Err(ParseError::RelativeUrlWithoutBase) if !raw.starts_with("//") => encode_relative(raw),
        Err(_) => fallback_encode(raw),
    }
}

fn encode_relative(raw: &str) -> String {
    let escaped = raw.replace('\\', "%5C");
    let resolved = Url::parse(RELATIVE_BASE).and_then(|base| base.join(&escaped));
    match resolved {
        Ok(url) => strip_resolver_slash(raw, &url[Position::BeforePath..]).to_string(),
        Err(_) => fallback_encode(raw),
    }
}

/// Removes the `/` that resolution puts in front of references without one.
pub fn strip_resolver_slash<'a>(raw: &str, encoded: &'a str) -> &'a str {
    if raw.starts_with('/') {
        encoded
    } else {
        encoded.strip_prefix('/').unwrap_or(encoded)
    }
}

fn fallback_encode(raw: &str) -> String {
    utf8_percent_encode(raw, FALLBACK_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_absolute_url_is_encoded() {
        assert_eq!(
            encode_url("https://example.com/a b?q=x y"),
            "https://example.com/a%20b?q=x%20y"
        );
    }

    #[test]
    fn test_percent_sequences_are_not_reencoded() {
        let once = encode_url("https://example.com/a%20b");
        assert_eq!(once, "https://example.com/a%20b");
        assert_eq!(encode_url(&once), once);
    }

    #[test]
    fn test_anchor_keeps_no_leading_slash() {
        assert_eq!(encode_url("#intro"), "#intro");
        assert_eq!(encode_url("#two words"), "#two%20words");
    }

    #[test]
    fn test_absolute_path_keeps_its_slash() {
        assert_eq!(encode_url("/docs/a b"), "/docs/a%20b");
    }

    #[test]
    fn test_strip_resolver_slash() {
        assert_eq!(strip_resolver_slash("#x", "/#x"), "#x");
        assert_eq!(strip_resolver_slash("/x", "/x"), "/x");
    }

    #[test]
    fn test_unparseable_input_falls_back() {
        assert_eq!(encode_url("http://"), "http://");
        assert_eq!(encode_url("//host/a b"), "//host/a%20b");
        assert_eq!(encode_url("//host/it's"), "//host/it%27s");
    }

    #[test]
    fn test_backslashes_never_become_a_host() {
        assert_eq!(encode_url("/\\x?'"), "/%5Cx?%27");
        assert_eq!(encode_url("\\\\?'"), "%5C%5C?%27");
        assert_eq!(encode_url("/%5Cx?%27"), "/%5Cx?%27");
    }

    #[test]
    fn test_value_urls_escape_brackets() {
        assert_eq!(
            encode_value_url("https://example.com/a]b?[x]"),
            "https://example.com/a%5Db?%5Bx%5D"
        );
        assert_eq!(encode_value_url("#intro"), "#intro");
    }

    fn url_like() -> impl Strategy<Value = String> {
        let tail = prop_oneof![
            "[a-zA-Z0-9 %#?=&._~'-]{0,24}",
            r"[\PC\\\[\]%]{0,16}",
        ];
        (
            prop::sample::select(vec!["", "#", "/", "//", "https://example.com/"]),
            tail,
        )
            .prop_map(|(prefix, tail)| format!("{prefix}{tail}"))
    }

    proptest! {
        #[test]
        fn prop_encoding_is_idempotent(raw in url_like()) {
            let once = encode_url(&raw);
            prop_assert_eq!(encode_url(&once), once);
        }

        #[test]
        fn prop_anchor_never_gains_a_slash(tail in "[a-zA-Z0-9 %._-]{0,24}") {
            let raw = format!("#{tail}");
            prop_assert!(!encode_url(&raw).starts_with("/#"));
        }

        #[test]
        fn prop_value_urls_have_no_brackets(raw in url_like()) {
            let url = encode_value_url(&encode_url(&raw));
            prop_assert!(!url.contains('[') && !url.contains(']'));
        }
    }
}

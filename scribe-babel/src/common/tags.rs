//! Tag wrapping for the angle (`<t>`) and bracket (`[t]`) markup syntaxes.
//!
//! Two attribute styles exist and a dialect may mix them:
//!
//! - markup attributes: `<a href="x">c</a>`, `[list type="1"]c[/list]`
//! - value tags: `[url=x]c[/url]`, `[font=monospace]c[/font]`
//!
//! An empty attribute list produces a bare opening tag, never `<p >` or
//! `[p=]`. Output fidelity depends on that.

/// How a dialect spells its tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSyntax {
    /// `<tag key="value">content</tag>`
    Angle,
    /// `[tag key="value"]content[/tag]`
    Bracket,
}

impl TagSyntax {
    fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            TagSyntax::Angle => ("<", ">"),
            TagSyntax::Bracket => ("[", "]"),
        }
    }

    /// Wraps `content` in `tag`, rendering `attrs` as `key="value"` pairs.
    pub fn wrap(self, tag: &str, content: &str, attrs: &[(&str, &str)]) -> String {
        let (open, close) = self.delimiters();
        let mut out = String::with_capacity(content.len() + 2 * tag.len() + 5);
        out.push_str(open);
        out.push_str(tag);
        for (key, value) in attrs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&self.escape_attribute(value));
            out.push('"');
        }
        out.push_str(close);
        out.push_str(content);
        out.push_str(&self.close_tag(tag));
        out
    }

    /// Wraps `content` in `tag` with `value` bound to the tag name itself.
    pub fn wrap_value(self, tag: &str, value: &str, content: &str) -> String {
        let (open, close) = self.delimiters();
        format!("{open}{tag}={value}{close}{content}{}", self.close_tag(tag))
    }

    /// A content-less tag: `<hr />` or `[hr]`.
    pub fn void(self, tag: &str) -> String {
        match self {
            TagSyntax::Angle => format!("<{tag} />"),
            TagSyntax::Bracket => format!("[{tag}]"),
        }
    }

    fn close_tag(self, tag: &str) -> String {
        let (open, close) = self.delimiters();
        format!("{open}/{tag}{close}")
    }

    fn escape_attribute(self, value: &str) -> String {
        match self {
            TagSyntax::Angle => value.replace('&', "&amp;").replace('"', "&quot;"),
            TagSyntax::Bracket => value.to_string(),
        }
    }
}

/// A tag as stored in a rendering profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSpec {
    /// Tag without attributes
    Plain(&'static str),
    /// Tag with its value bound to the name (`tag=value`)
    Value(&'static str, &'static str),
    /// Tag with fixed markup attributes
    Attrs(&'static str, &'static [(&'static str, &'static str)]),
}

impl TagSpec {
    pub fn render(&self, syntax: TagSyntax, content: &str) -> String {
        match self {
            TagSpec::Plain(name) => syntax.wrap(name, content, &[]),
            TagSpec::Value(name, value) => syntax.wrap_value(name, value, content),
            TagSpec::Attrs(name, attrs) => syntax.wrap(name, content, attrs),
        }
    }
}

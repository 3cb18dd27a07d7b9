//! Structured doc comments.
//!
//! A [`DocComment`] is the parsed form of a Javadoc-style block attached to a
//! declaration: a free-text body followed by `@tag value` lines.
//!
//! ```text
//! /**
//!  * Creates a user.
//!  *
//!  * @docName Create user
//!  * @required
//!  */
//! ```
//!
//! The accessors [`tag_value`], [`has_tag`] and [`body_text`] take an
//! `Option<&DocComment>` so a missing comment reads the same as a missing tag.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// `{@link Foo#bar}`, `{@code x}`, `{@literal <T>}`
static INLINE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{@[A-Za-z]+\s*([^}]*)\}").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct DocComment {
    body: String,
    tags: HashMap<String, String>,
}

impl DocComment {
    /// Parse raw comment text.
    ///
    /// Accepts either the full `/** ... */` block or its content with the
    /// delimiters already stripped. Never fails: text that contains no tags
    /// becomes the body, and an empty input yields an empty comment.
    ///
    /// When a tag occurs more than once, the first occurrence is kept.
    ///
    /// Each line is trimmed after its `*` gutter is removed, so relative
    /// indentation inside the body is not preserved.
    pub fn parse(raw: &str) -> Self {
        let mut body_lines: Vec<&str> = Vec::new();
        let mut tags: HashMap<String, String> = HashMap::new();
        let mut current: Option<(String, String)> = None;

        for line in content_lines(raw) {
            if let Some((name, value)) = parse_block_tag(line) {
                if let Some((name, value)) = current.take() {
                    tags.entry(name).or_insert(value);
                }
                current = Some((name.to_string(), value.to_string()));
                continue;
            }

            match current.as_mut() {
                // Continuation of the previous tag's value
                Some((_, value)) => {
                    if !line.is_empty() {
                        if !value.is_empty() {
                            value.push(' ');
                        }
                        value.push_str(line);
                    }
                }
                None => body_lines.push(line),
            }
        }

        if let Some((name, value)) = current.take() {
            tags.entry(name).or_insert(value);
        }

        let tags = tags
            .into_iter()
            .map(|(name, value)| (name, unwrap_inline_tags(value.trim())))
            .collect();

        Self {
            body: unwrap_inline_tags(body_lines.join("\n").trim()),
            tags,
        }
    }

    /// Builder used by tests and by providers that already hold a split
    /// comment.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.entry(name.into()).or_insert_with(|| value.into());
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Raw tag value. `None` means the tag is absent; `Some("")` means the
    /// tag is present without a value.
    ///
    /// A leading `@` on `name` is ignored, so `"@required"` and `"required"`
    /// look up the same tag.
    pub fn tag(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix('@').unwrap_or(name);
        self.tags.get(name).map(String::as_str)
    }

    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<String> for DocComment {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for DocComment {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Trimmed value of `tag_name`, or `""` when the comment or tag is missing or
/// the value is blank.
pub fn tag_value(comment: Option<&DocComment>, tag_name: &str) -> String {
    comment
        .and_then(|c| c.tag(tag_name))
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// True when the tag is present, whatever its value.
pub fn has_tag(comment: Option<&DocComment>, tag_name: &str) -> bool {
    comment.is_some_and(|c| c.tag(tag_name).is_some())
}

/// Trimmed body text, or `""` when there is no comment.
pub fn body_text(comment: Option<&DocComment>) -> String {
    comment
        .map(|c| c.body().trim())
        .unwrap_or_default()
        .to_string()
}

/// Strip comment delimiters and the leading `*` gutter from every line.
fn content_lines(raw: &str) -> impl Iterator<Item = &str> {
    let text = raw.trim();
    let text = text.strip_suffix("*/").unwrap_or(text);
    let text = text
        .strip_prefix("/**")
        .or_else(|| text.strip_prefix("/*"))
        .unwrap_or(text);

    text.lines().map(|line| {
        let line = line.trim();
        match line.strip_prefix('*') {
            Some(rest) => rest.trim(),
            None => line,
        }
    })
}

/// `@name rest of line` -> `("name", "rest of line")`
fn parse_block_tag(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('@')?;
    let (name, value) = match rest.split_once(char::is_whitespace) {
        Some((name, value)) => (name, value.trim()),
        None => (rest, ""),
    };
    if name.is_empty() {
        return None;
    }
    Some((name, value))
}

fn unwrap_inline_tags(text: &str) -> String {
    INLINE_TAG_REGEX
        .replace_all(text, |caps: &regex::Captures| caps[1].trim().to_string())
        .into_owned()
}

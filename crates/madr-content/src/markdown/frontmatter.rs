//! YAML front matter splitting.
//!
//! MADR 3 and later open a record with a YAML block delimited by `---`:
//!
//! ```markdown
//! ---
//! status: accepted
//! date: 2024-03-01
//! decision-makers: [Alice, Bob]
//! ---
//!
//! # Use Plain JUnit5 for advanced test assertions
//! ```
//!
//! Left in place, CommonMark reads the YAML line before the closing `---`
//! as a setext level-2 heading, which would invent a bogus section. The block
//! is therefore split off before the node tree is built.
//!
//! # Usage
//!
//! ```rust
//! use madr_content::markdown::extract_frontmatter;
//!
//! let content = "---\nstatus: accepted\n---\n\n# Title";
//! let result = extract_frontmatter(content);
//!
//! assert!(result.has_frontmatter());
//! assert_eq!(result.get_str("status"), Some("accepted"));
//! assert_eq!(result.body().trim(), "# Title");
//! ```

use madr_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_yaml::Value;

/// Result of splitting front matter from a document.
#[derive(Debug, Clone)]
pub struct FrontmatterResult<'a> {
    value: Option<Value>,
    body: &'a str,
    had_delimiters: bool,
}

impl<'a> FrontmatterResult<'a> {
    fn parsed(value: Value, body: &'a str) -> Self {
        Self {
            value: Some(value),
            body,
            had_delimiters: true,
        }
    }

    fn absent(body: &'a str) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: false,
        }
    }

    fn empty(body: &'a str) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: true,
        }
    }

    /// Whether valid YAML front matter was found.
    pub fn has_frontmatter(&self) -> bool {
        self.value.is_some()
    }

    /// Whether a delimited block was split off, even if it was empty.
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// The raw YAML value, if present.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The Markdown after the closing delimiter (or the whole input).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Deserialize the front matter into a typed struct.
    ///
    /// Returns `Ok(None)` when there is no front matter, and
    /// [`Error::Parse`] when it does not fit `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.value {
            Some(value) => serde_yaml::from_value(value.clone())
                .map(Some)
                .map_err(|e| Error::parse(format!("Failed to deserialize frontmatter: {e}"))),
            None => Ok(None),
        }
    }

    /// A string field from the front matter.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.value.as_ref()?.get(key)?.as_str()
    }
}

/// Split YAML front matter from the start of `content`.
///
/// - No opening `---` line, or no closing one: the whole input is body.
/// - An empty or blank block is split off without a value.
/// - A block that is not a YAML mapping (invalid YAML, a list, a scalar, or
///   only comments) is not front matter at all. A document may open with a
///   `---` thematic break, so the whole input is returned as body.
pub fn extract_frontmatter(content: &str) -> FrontmatterResult<'_> {
    let Some(after_open) = strip_delimiter_line(content) else {
        return FrontmatterResult::absent(content);
    };

    let (yaml, rest) = if let Some(rest) = strip_delimiter_line(after_open) {
        ("", rest)
    } else if let Some(pos) = find_closing_delimiter(after_open) {
        let (yaml, closing) = after_open.split_at(pos);
        match strip_delimiter_line(closing) {
            Some(rest) => (yaml, rest),
            None => return FrontmatterResult::absent(content),
        }
    } else {
        log::warn!("Frontmatter opening delimiter found but no closing delimiter");
        return FrontmatterResult::absent(content);
    };

    if yaml.trim().is_empty() {
        return FrontmatterResult::empty(rest);
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(value @ Value::Mapping(_)) => FrontmatterResult::parsed(value, rest),
        Ok(_) => {
            log::debug!("Leading block is not a YAML mapping; treating it as Markdown");
            FrontmatterResult::absent(content)
        }
        Err(e) => {
            log::warn!("Leading block is not valid YAML; treating it as Markdown: {e}");
            FrontmatterResult::absent(content)
        }
    }
}

/// If `s` starts with a `---` line, return what follows that line.
fn strip_delimiter_line(s: &str) -> Option<&str> {
    let rest = s.strip_prefix("---")?;
    let rest = rest.trim_start_matches([' ', '\t']);
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Byte offset of the first line in `s` that is a closing `---` delimiter.
fn find_closing_delimiter(s: &str) -> Option<usize> {
    let mut offset = 0;
    for line in s.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

// ============================================================================
// Tests
// ============================================================================

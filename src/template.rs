//! Template text and safe placeholder substitution.
//!
//! Placeholders are written `$name` or `${name}`, where a name starts with a
//! letter or underscore followed by letters, digits or underscores. `$$`
//! stands for a literal `$`. Substitution never fails: a placeholder without
//! a value, or a `$` that does not start a placeholder, is kept as written.

use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"\$(?:(?P<escaped>\$)|(?P<named>[_a-zA-Z][_a-zA-Z0-9]*)|\{(?P<braced>[_a-zA-Z][_a-zA-Z0-9]*)\})",
        )
        .expect("placeholder pattern is valid")
    })
}

/// Template loaded once and reused read-only for every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// Builds the default template used when no template file is given:
    /// `"<h>: { <h> }"` for every header, concatenated without separator.
    pub fn from_headers(headers: &[String]) -> Self {
        let text = headers
            .iter()
            .map(|h| format!("{0}: {{ {0} }}", h))
            .collect::<String>();
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces every placeholder found in `mapping` with its value.
    pub fn safe_substitute(&self, mapping: &IndexMap<String, String>) -> String {
        placeholder_pattern()
            .replace_all(&self.text, |caps: &Captures| {
                if caps.name("escaped").is_some() {
                    return "$".to_string();
                }
                let name = caps.name("named").or_else(|| caps.name("braced"));
                match name.and_then(|n| mapping.get(n.as_str())) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

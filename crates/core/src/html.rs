//! Markup trust boundary.
//!
//! Rich-text columns (`preview_text`, `full_text`, `editors_note`) are
//! written by the editorial pipeline, which sanitizes them before insert.
//! They are rendered verbatim. Everything else that reaches a page is plain
//! text and must go through [`escape_text`].

use std::fmt;

use serde::Serialize;

/// Pre-sanitized HTML that is injected into pages without escaping.
///
/// Construct it only from store columns whose writers guarantee the markup
/// is safe. Plain strings from any other source must be escaped instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Mark markup from the content store as trusted.
    pub fn from_store(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape plain text for inclusion in HTML element content or a quoted
/// attribute value.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

//! Escaping of untrusted text for display surfaces.
//!
//! Every string that originates from the server (table names, column names,
//! cell values, error messages) passes through an [`Escaper`] exactly once on
//! its way to the screen. The result is a [`SafeText`], which cannot be built
//! any other way, so surfaces that accept `SafeText` never escape again.

use std::fmt;

/// Text that has already been escaped for a particular surface.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct SafeText(String);

impl SafeText {
    /// Empty text needs no escaping on any surface.
    pub fn empty() -> Self {
        SafeText(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Converts raw text into a form that cannot alter the structure of a surface.
pub trait Escaper: Send + Sync {
    /// Append the escaped form of `raw` to `out`.
    fn escape_into(&self, raw: &str, out: &mut String);

    fn escape(&self, raw: &str) -> SafeText {
        let mut out = String::with_capacity(raw.len());
        self.escape_into(raw, &mut out);
        SafeText(out)
    }
}

/// Markup escaper: safe both as element text and inside a quoted attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn escape_into(&self, raw: &str, out: &mut String) {
        for ch in raw.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(ch),
            }
        }
    }
}

/// Terminal escaper: printable text passes through, control characters are
/// shown as visible escapes so they cannot move the cursor or restyle output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalEscaper;

impl Escaper for TerminalEscaper {
    fn escape_into(&self, raw: &str, out: &mut String) {
        for ch in raw.chars() {
            match ch {
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() || is_bidi_control(c) => {
                    out.extend(c.escape_unicode());
                }
                c => out.push(c),
            }
        }
    }
}

// Bidi overrides reorder what follows them on screen.
fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
}

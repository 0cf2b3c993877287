//! HTML metacharacter escaping for highlighter input.

/// Escape the three HTML metacharacters in `text`.
///
/// Replacements are applied once each over the whole string, `&` first,
/// so the `&lt;`/`&gt;` entities introduced for `<` and `>` are not
/// themselves re-escaped.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

//! orderlens-highlight: HTML-safe JSON syntax highlighting.
//!
//! Turns a JSON text (or any `serde_json::Value`) into a markup string
//! where each recognized token is wrapped in a `<span>` carrying a
//! semantic class. The pipeline is three pure stages:
//!
//! 1. [`escape()`] -- escape the HTML metacharacters `&`, `<`, `>`
//! 2. [`scan()`] -- one left-to-right lexical pass producing [`Segment`]s
//! 3. [`render()`] -- wrap classified tokens, pass the rest through
//!
//! [`highlight()`] composes the three; [`highlight_value()`] first
//! pretty-prints a JSON value with 2-space indentation.
//!
//! This is deliberately NOT a JSON parser: input is assumed to already be
//! valid JSON (or any string) and is tokenized for display only. Text that
//! matches no token pattern passes through escaped but unwrapped.

pub mod escape;
pub mod lexer;

pub use escape::escape;
pub use lexer::{scan, Segment, TokenClass};

/// Wrap the classified segments of an already-escaped text in spans.
///
/// Unmatched text is emitted as-is, interleaved in original order, so
/// stripping the span tags recovers the escaped input exactly.
pub fn render(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        match seg {
            Segment::Text(text) => out.push_str(text),
            Segment::Token { text, class } => {
                out.push_str("<span class=\"");
                out.push_str(class.css_class());
                out.push_str("\">");
                out.push_str(text);
                out.push_str("</span>");
            }
        }
    }
    out
}

/// Highlight a JSON text: escape, scan, render.
///
/// Deterministic, does not mutate the input, and only ever adds bytes
/// (entity escapes and span wrappers), so the output is never shorter
/// than the input. An empty input produces an empty output.
pub fn highlight(text: &str) -> String {
    render(&scan(&escape(text)))
}

/// Highlight an arbitrary JSON value.
///
/// The value is first serialized to its human-readable indented form
/// (2-space indentation) -- the canonical pretty-printed text this
/// crate colorizes -- then highlighted like any other text.
pub fn highlight_value(value: &serde_json::Value) -> String {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    highlight(&text)
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

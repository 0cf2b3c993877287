//! End-to-end properties of the highlighter markup.
//!
//! The central guarantee: wrapping is purely additive. Stripping the
//! span tags from the output and undoing the entity escaping must
//! recover the pretty-printed serialization exactly.

use orderlens_highlight::{escape, highlight, highlight_value};

/// Remove every span wrapper, keeping the wrapped text.
fn strip_spans(markup: &str) -> String {
    let mut out = String::new();
    let mut rest = markup;
    while let Some(start) = rest.find("<span class=\"") {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        let close = after.find('>').expect("span tag closed");
        rest = &after[close + 1..];
        let end = rest.find("</span>").expect("span terminated");
        out.push_str(&rest[..end]);
        rest = &rest[end + "</span>".len()..];
    }
    out.push_str(rest);
    out
}

/// Undo `escape()` (reverse order: entities for `<`/`>` first).
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[test]
fn stripping_spans_and_unescaping_recovers_the_pretty_print() {
    let values = [
        serde_json::json!({"id": "abc", "total": 42}),
        serde_json::json!([1, 2.5, true, false, null, "text"]),
        serde_json::json!({"nested": {"list": [{"deep": null}]}}),
        serde_json::json!({"html": "<b>bold & loud</b>", "n": 7}),
        serde_json::json!("just a string"),
        serde_json::json!(3.25),
    ];
    for value in values {
        let pretty = serde_json::to_string_pretty(&value).unwrap();
        let markup = highlight_value(&value);
        assert_eq!(unescape(&strip_spans(&markup)), pretty, "value: {}", value);
    }
}

#[test]
fn metacharacters_are_escaped_once_with_ampersand_first() {
    let out = highlight(r#"{"cmp": "1 < 2 > 0 & true"}"#);
    assert!(out.contains("1 &lt; 2 &gt; 0 &amp; true"));
    assert!(!out.contains("&amp;lt;"));
    assert!(!out.contains("&amp;amp;"));
}

#[test]
fn escape_helper_matches_the_pipeline() {
    let input = r#"{"x": "<&>"}"#;
    let stripped = strip_spans(&highlight(input));
    assert_eq!(stripped, escape(input));
}

#[test]
fn key_and_value_strings_get_distinct_classes() {
    let out = highlight(r#"{"name": "value"}"#);
    assert!(out.contains(r#"<span class="json-key">"name":</span>"#));
    assert!(out.contains(r#"<span class="json-string">"value"</span>"#));
}

#[test]
fn keyword_lookalike_inside_string_is_not_a_boolean() {
    let out = highlight(r#"{"note": "true story"}"#);
    assert!(out.contains(r#"<span class="json-string">"true story"</span>"#));
    assert!(!out.contains("json-boolean"));
}

#[test]
fn null_and_false_values_are_classified() {
    let out = highlight(r#"{"x": null, "y": false}"#);
    assert!(out.contains(r#"<span class="json-null">null</span>"#));
    assert!(out.contains(r#"<span class="json-boolean">false</span>"#));
}

#[test]
fn number_like_string_content_is_not_a_number() {
    let out = highlight(r#"{"version": "2.0"}"#);
    assert!(out.contains(r#"<span class="json-string">"2.0"</span>"#));
    assert!(!out.contains(r#"<span class="json-number">"#));
}

#[test]
fn arbitrary_non_json_text_passes_through() {
    let out = highlight("not json at all");
    assert_eq!(out, "not json at all");
}

//! Single-pass lexer over JSON-shaped text.
//!
//! An ordered list of matchers is tried at each position: quoted string
//! (optionally followed by whitespace and a colon), the literal words
//! `true`/`false`/`null`, then a numeric literal. Whatever matches first
//! wins; anything else passes through as plain text. String contents are
//! consumed atomically, so a string value that happens to contain a word
//! like `true` or a digit run is never rescanned as its own token.

/// Category of a classified token. Closed set -- nothing else is ever
/// assigned to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Quoted string immediately followed by a colon (object key).
    Key,
    /// Quoted string not followed by a colon.
    Str,
    /// The literal `true` or `false`.
    Bool,
    /// The literal `null`.
    Null,
    /// Integer or decimal literal.
    Number,
}

impl TokenClass {
    /// The markup class name for this category.
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenClass::Key => "json-key",
            TokenClass::Str => "json-string",
            TokenClass::Bool => "json-boolean",
            TokenClass::Null => "json-null",
            TokenClass::Number => "json-number",
        }
    }
}

/// One piece of the scanned text, in original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text that matched no token pattern; passed through unwrapped.
    Text(String),
    /// A classified token. `text` is the raw matched substring -- for a
    /// key this includes the trailing whitespace and colon.
    Token { text: String, class: TokenClass },
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scan `text` left to right into classified and plain segments.
///
/// Concatenating the segment texts in order reproduces `text` exactly.
pub fn scan(text: &str) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut pos = 0usize;

    while pos < chars.len() {
        // Word-boundary check for keywords and numbers: the previous
        // character must not itself be a word character.
        let at_boundary = pos == 0 || !is_word_char(chars[pos - 1]);

        let matched = match_string(&chars, pos)
            .or_else(|| if at_boundary { match_keyword(&chars, pos) } else { None })
            .or_else(|| if at_boundary { match_number(&chars, pos) } else { None });

        match matched {
            Some((end, class)) => {
                if !plain.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut plain)));
                }
                segments.push(Segment::Token {
                    text: chars[pos..end].iter().collect(),
                    class,
                });
                pos = end;
            }
            None => {
                plain.push(chars[pos]);
                pos += 1;
            }
        }
    }

    if !plain.is_empty() {
        segments.push(Segment::Text(plain));
    }
    segments
}

/// Match a double-quoted string starting at `pos`, folding in a trailing
/// `\s* :` when present (which classifies it as a key).
///
/// Escapes inside the string (`\uXXXX` and `\` + any other character) are
/// consumed without interpretation -- the token keeps the raw text.
/// Returns `None` when the string is unterminated; the quote then passes
/// through as plain text.
fn match_string(chars: &[char], pos: usize) -> Option<(usize, TokenClass)> {
    if chars[pos] != '"' {
        return None;
    }
    let mut i = pos + 1;
    loop {
        if i >= chars.len() {
            return None;
        }
        match chars[i] {
            '"' => {
                i += 1;
                break;
            }
            '\\' => {
                if i + 1 >= chars.len() {
                    return None;
                }
                if chars[i + 1] == 'u' {
                    // \uXXXX -- four alphanumerics after the u
                    if i + 5 >= chars.len()
                        || !chars[i + 2..i + 6].iter().all(|c| c.is_ascii_alphanumeric())
                    {
                        return None;
                    }
                    i += 6;
                } else {
                    i += 2;
                }
            }
            _ => i += 1,
        }
    }

    // Peek past whitespace for a colon; if found, fold it into the token.
    let mut j = i;
    while j < chars.len() && chars[j].is_whitespace() {
        j += 1;
    }
    if j < chars.len() && chars[j] == ':' {
        Some((j + 1, TokenClass::Key))
    } else {
        Some((i, TokenClass::Str))
    }
}

/// Match `true`, `false`, or `null` at `pos`, requiring a word boundary
/// after the literal. Boundary before is checked by the caller.
fn match_keyword(chars: &[char], pos: usize) -> Option<(usize, TokenClass)> {
    for (word, class) in [
        ("true", TokenClass::Bool),
        ("false", TokenClass::Bool),
        ("null", TokenClass::Null),
    ] {
        let end = pos + word.len();
        if end <= chars.len()
            && chars[pos..end].iter().collect::<String>() == word
            && (end == chars.len() || !is_word_char(chars[end]))
        {
            return Some((end, class));
        }
    }
    None
}

/// Match a digit run with an optional `.` + digit run at `pos`, requiring
/// a word boundary after it. No sign or exponent handling.
fn match_number(chars: &[char], pos: usize) -> Option<(usize, TokenClass)> {
    if !chars[pos].is_ascii_digit() {
        return None;
    }
    let mut i = pos;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i < chars.len() && chars[i] == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit() {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < chars.len() && is_word_char(chars[i]) {
        return None;
    }
    Some((i, TokenClass::Number))
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

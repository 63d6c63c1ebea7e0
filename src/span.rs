//! Recognition of structural spans.
//!
//! A structural span is a markdown link `[display](target)` or a template
//! macro call such as `{{domxref("Foo", "顯示文字")}}`. Spans are atomic:
//! the tokenizer never splits one and the rewriter copies the raw text
//! through verbatim. What a span contributes to a spacing decision is its
//! effective boundary characters, taken from its visible content rather
//! than its delimiters. For links that content is the display text; for
//! macros it is the second string parameter when present and non-empty,
//! otherwise the first.

use regex::Regex;

static MACRO_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r#"^\{\{.*?\("([^"]*)"(?:,\s*"([^"]*)")?\)\}\}"#).expect("valid macro regex")
});

/// Grammar a structural span was recognised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Markdown link: `[display](target)`.
    Link,
    /// Template macro call: `{{name("p1", "p2")}}`.
    Macro,
}

/// An atomic span recognised within a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// Which grammar matched.
    pub kind: SpanKind,
    /// The matched text, reproduced verbatim on output.
    pub raw: &'a str,
    /// First character of the span's visible content, `None` when the
    /// content is empty.
    pub boundary_start: Option<char>,
    /// Last character of the span's visible content.
    pub boundary_end: Option<char>,
}

/// Try to recognise a structural span anchored at `offset`.
///
/// Returns the span and the offset just past it. Recognition is all or
/// nothing: when neither grammar matches at `offset` the function returns
/// `None` without consuming input, and the caller treats the character as
/// plain text.
#[must_use]
pub fn match_span(line: &str, offset: usize) -> Option<(Span<'_>, usize)> {
    let rest = &line[offset..];
    if rest.starts_with('[') {
        let (len, display) = match_link(rest)?;
        return Some((
            Span {
                kind: SpanKind::Link,
                raw: &rest[..len],
                boundary_start: display.chars().next(),
                boundary_end: display.chars().next_back(),
            },
            offset + len,
        ));
    }
    if rest.starts_with("{{") {
        let (len, param) = match_macro(rest)?;
        return Some((
            Span {
                kind: SpanKind::Macro,
                raw: &rest[..len],
                boundary_start: param.chars().next(),
                boundary_end: param.chars().next_back(),
            },
            offset + len,
        ));
    }
    None
}

/// Match `[display](target)` at the start of `rest`.
///
/// Display and target must both be non-empty; the display ends at the first
/// `]` and the target at the first `)`, with no nesting. Returns the byte
/// length of the whole link and the display text.
fn match_link(rest: &str) -> Option<(usize, &str)> {
    let display_end = rest.find(']')?;
    let display = &rest[1..display_end];
    if display.is_empty() {
        return None;
    }
    if !rest[display_end + 1..].starts_with('(') {
        return None;
    }
    let target_start = display_end + 2;
    let close = rest[target_start..].find(')')?;
    if close == 0 {
        return None;
    }
    Some((target_start + close + 1, display))
}

/// Match a macro call at the start of `rest` and pick its effective
/// parameter: the second string argument when present and non-empty,
/// otherwise the first.
fn match_macro(rest: &str) -> Option<(usize, &str)> {
    let caps = MACRO_RE.captures(rest)?;
    let raw_len = caps[0].len();
    let first = caps.get(1).map_or("", |m| m.as_str());
    let second = caps.get(2).map_or("", |m| m.as_str());
    let param = if second.is_empty() { first } else { second };
    Some((raw_len, param))
}

//! Line rewriting.
//!
//! [`rewrite_line`] reassembles a tokenised line: structural spans are
//! copied verbatim, plain runs are normalised internally, and every
//! token-to-token boundary receives whatever the decision engine says it
//! should, replacing the whitespace that sat there in the source. Leading
//! indentation before plain text survives; trailing whitespace does not.

use crate::{
    boundary::{Edge, Spacing, decide},
    classify::{CharClass, classify, is_boundary_ws},
    tokenize::{Token, tokenize_line},
};

/// Rewrite a single line with normalised spacing.
///
/// The input must not contain a line terminator.
#[must_use]
pub fn rewrite_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut prev: Option<Edge> = None;

    for token in tokenize_line(line) {
        match token {
            Token::Text(t) => {
                let trimmed = t.trim_matches(is_boundary_ws);
                let (Some(first), Some(last)) =
                    (trimmed.chars().next(), trimmed.chars().next_back())
                else {
                    // Whitespace-only run between spans or at a line edge
                    // is boundary material and is discarded.
                    continue;
                };
                match prev {
                    None => {
                        let lead = t.len() - t.trim_start_matches(is_boundary_ws).len();
                        out.push_str(&t[..lead]);
                    }
                    Some(edge) => {
                        if decide(edge, Edge::Text(first)) == Spacing::One {
                            out.push(' ');
                        }
                    }
                }
                out.push_str(&normalize_run(trimmed));
                prev = Some(Edge::Text(last));
            }
            Token::Span(span) => {
                if let Some(edge) = prev
                    && decide(edge, Edge::Span(span.boundary_start)) == Spacing::One
                {
                    out.push(' ');
                }
                out.push_str(span.raw);
                prev = Some(Edge::Span(span.boundary_end));
            }
        }
    }

    out
}

/// Normalise spacing inside one plain-text run.
///
/// Only pairs involving an ideograph are touched: whitespace between two
/// ideographs is removed, an ideograph next to an ASCII alphanumeric gets
/// exactly one space, and every other pair keeps its whitespace verbatim.
fn normalize_run(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut pending = String::new();
    let mut prev: Option<char> = None;

    for ch in text.chars() {
        if is_boundary_ws(ch) {
            pending.push(ch);
            continue;
        }
        match prev {
            Some(p) if !pending.is_empty() => match (classify(p), classify(ch)) {
                (CharClass::Ideograph, CharClass::Ideograph) => {}
                (CharClass::Ideograph, CharClass::AlphaNumeric)
                | (CharClass::AlphaNumeric, CharClass::Ideograph) => out.push(' '),
                _ => out.push_str(&pending),
            },
            Some(p) => match (classify(p), classify(ch)) {
                (CharClass::Ideograph, CharClass::AlphaNumeric)
                | (CharClass::AlphaNumeric, CharClass::Ideograph) => out.push(' '),
                _ => {}
            },
            None => out.push_str(&pending),
        }
        pending.clear();
        out.push(ch);
        prev = Some(ch);
    }
    out.push_str(&pending);
    out
}

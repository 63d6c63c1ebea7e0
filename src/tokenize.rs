//! Line tokenisation.
//!
//! A line is broken into an alternating sequence of plain-text runs and
//! structural spans in a single left-to-right scan. Spans never nest and
//! never cross a line terminator, so the scan needs no backtracking: once
//! a span is accepted the scanner advances past it, and a failed match at
//! an offset simply extends the current plain run by one character.

use crate::span::{Span, match_span};

/// Token emitted by [`tokenize_line`].
#[derive(Debug, PartialEq)]
pub enum Token<'a> {
    /// A run of characters belonging to neither span grammar.
    Text(&'a str),
    /// An atomic link or macro span.
    Span(Span<'a>),
}

/// Split a line into plain-text and structural-span tokens.
///
/// Concatenating the tokens' raw text in order reproduces `line` exactly.
/// The input must not contain a line terminator; terminators are split off
/// before tokenisation.
#[must_use]
pub fn tokenize_line(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut offset = 0;
    let mut text_start = 0;
    while offset < line.len() {
        if let Some((span, end)) = match_span(line, offset) {
            if text_start < offset {
                tokens.push(Token::Text(&line[text_start..offset]));
            }
            tokens.push(Token::Span(span));
            offset = end;
            text_start = end;
        } else {
            let Some(ch) = line[offset..].chars().next() else {
                break;
            };
            offset += ch.len_utf8();
        }
    }
    if text_start < line.len() {
        tokens.push(Token::Text(&line[text_start..]));
    }
    tokens
}

//! Character classification for spacing decisions.
//!
//! Every code point maps to exactly one [`CharClass`]; there is no failure
//! mode. Only the CJK Unified Ideographs block counts as ideographic, and
//! only the ASCII space and tab count as whitespace, so exotic blanks such
//! as U+3000 or U+00A0 are never silently discarded at a boundary.

/// Spacing-relevant class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// CJK Unified Ideograph.
    Ideograph,
    /// CJK or fullwidth punctuation, exempt from forced spacing.
    Punctuation,
    /// ASCII letter or digit.
    AlphaNumeric,
    /// ASCII space or tab, discardable at boundaries.
    Whitespace,
    /// Carriage return or line feed.
    LineBreak,
    /// Everything else: other scripts, symbols, emoji.
    Other,
}

/// Classify a single character.
#[must_use]
pub fn classify(c: char) -> CharClass {
    match c {
        ' ' | '\t' => CharClass::Whitespace,
        '\n' | '\r' => CharClass::LineBreak,
        'A'..='Z' | 'a'..='z' | '0'..='9' => CharClass::AlphaNumeric,
        '\u{4E00}'..='\u{9FFF}' => CharClass::Ideograph,
        '\u{3000}'..='\u{303F}'     // CJK symbols and punctuation
        | '\u{FF00}'..='\u{FFEF}'   // halfwidth and fullwidth forms
        | '\u{2018}' | '\u{2019}'   // curly single quotes
        | '\u{201C}' | '\u{201D}'   // curly double quotes
        | '\u{2014}'                // em dash
        | '\u{2026}'                // horizontal ellipsis
        | '\u{00B7}'                // middle dot
        => CharClass::Punctuation,
        _ => CharClass::Other,
    }
}

/// Whether a character is boundary whitespace, i.e. discardable between
/// tokens.
#[must_use]
pub fn is_boundary_ws(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

//! Spacing decisions at token boundaries.
//!
//! Each boundary between two adjacent tokens is decided exactly once, after
//! any whitespace sitting on the boundary has been discarded. The decision
//! depends only on the two characters nearest the boundary, which makes the
//! rewrite a fixpoint: applying it to its own output changes nothing.

use crate::classify::{CharClass, classify};

/// One side of a token boundary, as seen by [`decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Plain text, carrying the character nearest the boundary once
    /// boundary whitespace has been discarded.
    Text(char),
    /// A structural span, carrying its content-derived boundary character.
    /// `None` when the span's content is empty.
    Span(Option<char>),
}

/// Whitespace a boundary receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// The neighbours touch.
    None,
    /// Exactly one ASCII space separates the neighbours.
    One,
}

/// Decide the spacing for the boundary between two adjacent tokens.
///
/// Raw text vetoes the space when its boundary character is punctuation; a
/// span's content character only carries that veto against another span,
/// never against text. Two ideographs stay glued, and a span with empty
/// content expresses no opinion, so no space is added beside it.
#[must_use]
pub fn decide(left: Edge, right: Edge) -> Spacing {
    match (left, right) {
        (Edge::Text(l), Edge::Text(r)) => {
            if suppresses(l) || suppresses(r) {
                Spacing::None
            } else {
                spacing_between(l, r)
            }
        }
        (Edge::Text(l), Edge::Span(r)) => {
            if suppresses(l) {
                Spacing::None
            } else {
                r.map_or(Spacing::None, |r| spacing_between(l, r))
            }
        }
        (Edge::Span(l), Edge::Text(r)) => {
            if suppresses(r) {
                Spacing::None
            } else {
                l.map_or(Spacing::None, |l| spacing_between(l, r))
            }
        }
        (Edge::Span(l), Edge::Span(r)) => match (l, r) {
            (Some(l), Some(r)) => {
                if suppresses(l) || suppresses(r) {
                    Spacing::None
                } else {
                    spacing_between(l, r)
                }
            }
            _ => Spacing::None,
        },
    }
}

fn suppresses(outer: char) -> bool {
    matches!(
        classify(outer),
        CharClass::Punctuation | CharClass::Whitespace | CharClass::LineBreak
    )
}

fn spacing_between(l: char, r: char) -> Spacing {
    if classify(l) == CharClass::Ideograph && classify(r) == CharClass::Ideograph {
        Spacing::None
    } else {
        Spacing::One
    }
}

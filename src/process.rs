//! Document-level processing.
//!
//! A document is rewritten one line at a time; no state crosses a line
//! boundary, so lines are handed to rayon and reassembled in their
//! original order. Each line keeps its own terminator, which means mixed
//! `\n` and `\r\n` documents round-trip without being unified.

use rayon::prelude::*;

use crate::spacing::rewrite_line;

/// Rewrite one raw line, preserving its terminator.
#[must_use]
pub fn process_line(raw: &str) -> String {
    let (content, terminator) = split_terminator(raw);
    let mut out = rewrite_line(content);
    out.push_str(terminator);
    out
}

/// Rewrite every line of a document.
#[must_use]
pub fn process_document(text: &str) -> String {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let processed: Vec<String> = lines.into_par_iter().map(process_line).collect();
    processed.concat()
}

fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(content) = raw.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = raw.strip_suffix('\n') {
        (content, "\n")
    } else {
        (raw, "")
    }
}

//! Library for normalising inter-script spacing in Markdown.
//!
//! Bilingual documents mixing CJK ideographs with Latin text tend to
//! accumulate inconsistent spacing: a missing space where scripts change,
//! a spurious one between two ideographs. `mdspacefix` rewrites each line
//! in a single pass: the line is tokenised into plain runs and structural
//! spans (markdown links and template macro calls), every token boundary
//! receives one spacing decision, and the line is reassembled. Spans are
//! never split and their content is never altered; only the whitespace at
//! boundaries changes. The rewrite is idempotent by construction.

pub mod boundary;
pub mod classify;
pub mod io;
pub mod process;
pub mod spacing;
pub mod span;
pub mod tokenize;

pub use boundary::{Edge, Spacing, decide};
pub use classify::{CharClass, classify};
pub use io::rewrite;
pub use process::{process_document, process_line};
pub use spacing::rewrite_line;
pub use span::{Span, SpanKind, match_span};
pub use tokenize::{Token, tokenize_line};

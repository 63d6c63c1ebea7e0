//! Utility helpers shared across integration tests.

use mdspacefix::process_document;

/// Assert that `input` normalises to `expected` and that a second pass
/// leaves the result alone.
pub fn assert_fixed(input: &str, expected: &str) {
    let first = process_document(input);
    assert_eq!(first, expected);
    let second = process_document(&first);
    assert_eq!(second, first, "second pass must be a no-op");
}

/// Assert that `input` passes through the pipeline untouched.
pub fn assert_unchanged(input: &str) {
    assert_fixed(input, input);
}

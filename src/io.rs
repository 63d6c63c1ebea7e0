//! File helpers for rewriting documents in place.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::process::process_document;

/// Rewrite a file in place with normalised spacing.
///
/// The new content goes to a temporary sibling first and replaces the
/// original by rename, so a failed write never leaves a truncated file.
/// If either step fails, the temporary is removed.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid UTF-8, or if
/// writing the replacement fails.
pub fn rewrite(path: &Path) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    let fixed = process_document(&text);
    write_replacing(path, &fixed)
}

fn write_replacing(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, contents)
        .and_then(|()| fs::rename(&tmp, path))
        .inspect_err(|_| {
            let _ = fs::remove_file(&tmp);
        })
}

use std::{
    collections::HashSet,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::bail;
use clap::Parser;
use mdspacefix::{process_document, rewrite};
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about = "Normalise CJK/Latin spacing in markdown files")]
struct Cli {
    /// Markdown files to rewrite in place
    files: Vec<PathBuf>,
}

/// Entry point for the spacing normaliser.
///
/// With file arguments, each file is rewritten in place; a failure on one
/// file is reported on stderr and does not stop the others. With no
/// arguments, stdin is filtered to stdout.
///
/// # Examples
///
/// ```sh
/// # Fix files in place
/// mdspacefix index.md guide.md
///
/// # Filter stdin
/// cat index.md | mdspacefix
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        print!("{}", process_document(&input));
        return Ok(());
    }

    // Repeated paths would race on the same temporary sibling.
    let mut seen = HashSet::new();
    let files: Vec<PathBuf> = cli
        .files
        .into_iter()
        .filter(|path| seen.insert(path.clone()))
        .collect();

    let failures: Vec<(PathBuf, io::Error)> = files
        .par_iter()
        .filter_map(|path| rewrite(path).err().map(|e| (path.clone(), e)))
        .collect();

    for (path, err) in &failures {
        eprintln!("{}: {err}", path.display());
    }
    if !failures.is_empty() {
        bail!("failed to rewrite {} of {} files", failures.len(), files.len());
    }
    Ok(())
}

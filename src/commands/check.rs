//! Check command for validating generated fixture posts.
//! Usage: stencil check [--dir PATH]
//!
//! Parses every `.md` file in the directory with the same front matter
//! model a downstream site builder would use, and fails if any file does
//! not parse.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::front_matter;

/// Execute the check command over every `.md` file in `dir`.
pub fn execute(dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));

    let entries = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("md"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        bail!("No .md files found in {}", dir.display());
    }

    let mut failures = 0usize;

    for path in &paths {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        match front_matter::parse_document(&content) {
            Ok((front_matter, _body)) => {
                println!(
                    "{} {} {}",
                    "✓".green(),
                    path.display(),
                    front_matter.created.dimmed()
                );
            }
            Err(e) => {
                failures += 1;
                println!("{} {}: {e:#}", "✗".red(), path.display());
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} fixture files failed to parse", paths.len());
    }

    println!("\n{} fixture files parsed cleanly.", paths.len());

    Ok(())
}

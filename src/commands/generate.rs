//! Generate command for populating a fixture corpus.
//! Usage: stencil generate [--count N] [--start-day D] [--seed S] [--out-dir PATH] [--sentence TEXT]

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::generator::{self, GenerateOptions};

/// Execute the generate command.
///
/// Every argument defaults to the original fixture run: 15 posts dated
/// from January 30th 2019 downwards, written to the current directory,
/// titled from the default sentence. With `--seed`, the run is
/// deterministic: the same seed reproduces the same titles, filenames,
/// and dates.
pub fn execute(
    count: Option<u32>,
    start_day: Option<u32>,
    seed: Option<u64>,
    out_dir: Option<PathBuf>,
    sentence: Option<String>,
) -> Result<()> {
    let defaults = GenerateOptions::default();
    let opts = GenerateOptions {
        count: count.unwrap_or(defaults.count),
        start_day: start_day.unwrap_or(defaults.start_day),
        out_dir: out_dir.unwrap_or(defaults.out_dir),
        sentence: sentence.unwrap_or(defaults.sentence),
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let posts =
        generator::generate(&opts, &mut rng).context("Failed to generate fixture posts")?;

    for post in &posts {
        println!(
            "{} {} {}",
            "✓".green(),
            post.title,
            post.path.display().to_string().cyan()
        );
    }

    println!("\nGenerated {} fixture posts.", posts.len());

    Ok(())
}

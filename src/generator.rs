//! The generation loop: sample, render, write, decrement the day.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::post;
use crate::words::{DEFAULT_SENTENCE, WordPool};

/// Number of posts a default run generates.
pub const DEFAULT_COUNT: u32 = 15;

/// Day of January 2019 the first post is dated with.
pub const DEFAULT_START_DAY: u32 = 30;

/// Options for one generation run. `Default` reproduces the original
/// fixture corpus: 15 posts, days 30 down to 16, written to the current
/// directory from the default sentence.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub count: u32,
    pub start_day: u32,
    pub out_dir: PathBuf,
    pub sentence: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            start_day: DEFAULT_START_DAY,
            out_dir: PathBuf::from("."),
            sentence: DEFAULT_SENTENCE.to_string(),
        }
    }
}

/// Record of one written post, in generation order.
#[derive(Debug, Clone)]
pub struct GeneratedPost {
    pub path: PathBuf,
    pub title: String,
    pub day: u32,
}

/// Generate `opts.count` fixture posts into `opts.out_dir`.
///
/// Each post draws one word sample; its title and filename slug are both
/// derived from that sample. The creation date counts down one day per
/// post, starting at `opts.start_day`.
///
/// Filename collisions are resolved by overwriting: two posts that
/// sample the same word sequence write the same path and the later one
/// wins. The returned records still list every post in generation order.
///
/// # Errors
///
/// * `Error::EmptyPool` if the sentence yields no usable words.
/// * `Error::DayRange` if any post would be dated outside January 2019;
///   checked up front, before anything is written.
/// * `Error::Write` on the first failed file write. The run stops there,
///   leaving earlier files in place.
pub fn generate<R: Rng>(opts: &GenerateOptions, rng: &mut R) -> Result<Vec<GeneratedPost>> {
    let pool = WordPool::from_sentence(&opts.sentence);
    validate_day_range(opts.start_day, opts.count)?;

    debug!(
        pool_size = pool.len(),
        count = opts.count,
        start_day = opts.start_day,
        "starting generation run"
    );

    let mut day = opts.start_day;
    let mut posts = Vec::with_capacity(opts.count as usize);

    for _ in 0..opts.count {
        let sampled = pool.sample(rng)?;
        let title = sampled.title();
        let slug = sampled.slug();

        let contents = post::render_document(&title, day);
        let path = opts.out_dir.join(post::filename(&slug));

        fs::write(&path, &contents).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        debug!(%title, path = %path.display(), day, "wrote fixture post");

        posts.push(GeneratedPost { path, title, day });
        day -= 1;
    }

    Ok(posts)
}

/// Every day the run will render must be a real day of January 2019.
fn validate_day_range(start_day: u32, count: u32) -> Result<()> {
    if count == 0 {
        return Ok(());
    }

    let out_of_range = || Error::DayRange { start_day, count };

    let last_day = start_day.checked_sub(count - 1).ok_or_else(out_of_range)?;
    for day in [last_day, start_day] {
        if NaiveDate::from_ymd_opt(2019, 1, day).is_none() {
            return Err(out_of_range());
        }
    }

    Ok(())
}

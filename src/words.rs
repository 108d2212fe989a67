//! Word pool construction and per-post sampling.
//!
//! The pool is built once per run from a source sentence. Each post draws
//! one sample from it; the post's title and its filename slug are both
//! derived from that single sample, so the two always agree.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};

/// Source sentence the default word pool is built from.
pub const DEFAULT_SENTENCE: &str = "You missed something  Velcro is loud The US Army removed velcro from their uniforms around 2010 since the opening of flaps gave positions away  Edit To the  replies saying they still have velcro";

/// Minimum number of words in a sampled title.
pub const MIN_TITLE_WORDS: usize = 2;

/// Maximum number of words in a sampled title.
pub const MAX_TITLE_WORDS: usize = 5;

/// Fixed pool of candidate title words, built once per run.
///
/// Tokens come from splitting the source sentence on single spaces and
/// trimming; tokens of one character or less are discarded (this also
/// drops the empty tokens produced by double spaces).
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    pub fn from_sentence(sentence: &str) -> Self {
        let words = sentence
            .split(' ')
            .map(str::trim)
            .filter(|token| token.chars().count() > 1)
            .map(String::from)
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Draw one sample for a post: a uniform word count in
    /// [MIN_TITLE_WORDS, MAX_TITLE_WORDS], then that many words drawn
    /// independently with replacement.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyPool` if the pool has no words. Sampling
    /// never loops or panics on an empty pool.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<SampledWords> {
        if self.words.is_empty() {
            return Err(Error::EmptyPool);
        }

        let count = rng.gen_range(MIN_TITLE_WORDS..=MAX_TITLE_WORDS);
        let words = (0..count)
            .map(|_| {
                self.words
                    .choose(rng)
                    .cloned()
                    .ok_or(Error::EmptyPool)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SampledWords { words })
    }
}

/// The words drawn for one post. Immutable once sampled; both the title
/// and the slug are derived from this value, never resampled.
#[derive(Debug, Clone)]
pub struct SampledWords {
    words: Vec<String>,
}

impl SampledWords {
    /// Space-joined title, trimmed.
    pub fn title(&self) -> String {
        self.words.join(" ").trim().to_string()
    }

    /// Hyphen-joined, lower-cased filename stem.
    pub fn slug(&self) -> String {
        self.words.join("-").trim().to_lowercase()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

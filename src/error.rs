//! Error types for the fixture generator core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The source sentence produced no usable tokens, so titles cannot
    /// be sampled.
    #[error("word pool is empty: the source sentence has no tokens longer than one character")]
    EmptyPool,

    /// The requested run would date a post outside January 2019.
    #[error("day range out of bounds: {count} posts starting at day {start_day} leave January 2019")]
    DayRange { start_day: u32, count: u32 },

    /// Opening or writing an output file failed. The run stops at the
    /// first failure; earlier files are left in place.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

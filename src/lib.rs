//! Cached-pattern fuzzy similarity scoring.
//!
//! `fuzzcache` compares one preprocessed *pattern* string against many
//! *candidate* strings. [`CachedRatio`] copies the pattern once and builds a
//! per-symbol position-bitmask structure from it; every subsequent comparison
//! runs the indel edit-distance recurrence word-at-a-time against that
//! structure, costing roughly `candidate_len × ⌈pattern_len / 64⌉` word
//! operations instead of a full O(m·n) dynamic program per call.
//!
//! # Examples
//!
//! ```
//! use fuzzcache::CachedRatio;
//!
//! let cache = CachedRatio::new("kitten");
//! assert_eq!(cache.score("kitten"), 0.0);
//!
//! let score = cache.score("sitting");
//! assert!(score > 0.0 && score < 1.0);
//! ```
//!
//! Scores are *dissimilarities*: `0.0` means identical and values approach
//! `1.0` as the strings diverge. Use [`CachedRatio::ratio`] for the
//! percentage-similarity view (100 = identical), or [`CachedRatio::distance`]
//! for the raw edit distance.
//!
//! The engine operates on raw bytes (any already-decoded fixed-width code
//! units work); it does no tokenization, case folding, or Unicode
//! segmentation.

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use std::collections::TryReserveError;

use thiserror::Error;

pub use crate::cache::CachedRatio;

mod cache;
#[cfg(feature = "ffi")]
pub mod ffi;
mod indel;
mod pattern;

//------------------------------------------------------------------------------
/// Errors reported by fallible cache construction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Allocating the owned pattern copy or its bitmask blocks failed.
    #[error("pattern cache allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}

//------------------------------------------------------------------------------
// One-shot convenience functions

/// Percentage similarity of `a` and `b` in `0.0..=100.0` without keeping a
/// cache around: builds the bitmask structure for `a` on the fly and scores
/// `b` against it. Prefer [`CachedRatio`] when `a` is compared repeatedly.
pub fn ratio(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> f64 {
    CachedRatio::new(a).ratio(b)
}

/// One-shot dissimilarity score of `a` and `b` in `0.0..=1.0`
/// (`0.0` = identical). Equivalent to `CachedRatio::new(a).score(b)`.
pub fn score(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> f64 {
    CachedRatio::new(a).score(b)
}

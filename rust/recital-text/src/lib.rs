//! # recital-text
//!
//! Stand-alone text utilities for aligning canonical-text segments:
//!
//! - [`distance`]: Levenshtein edit distance over Unicode scalar values.
//! - [`common_phrase`]: the longest word sequence shared verbatim by two
//!   strings, used to anchor an abbreviated segment against its nearest
//!   written-out neighbor.
//!
//! Both are pure functions with no dependencies; neither calls the other.

pub mod distance;
pub mod phrase;

pub use distance::distance;
pub use phrase::{DEFAULT_MIN_PHRASE, common_phrase};

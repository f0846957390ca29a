//! Approximate string equality for watchlist screening.
//!
//! ## Purpose
//!
//! Watchlist names arrive transliterated, abbreviated or misspelled relative
//! to user input. This crate scores two canonical strings in [0, 1] with the
//! Jaro measure and a Winkler-style boost for shared leading characters, so
//! that "Mohammed" and "Mohamed" rank closer than an unanchored edit distance
//! would place them.
//!
//! ## Guarantees
//!
//! - Deterministic and symmetric: `f(a, b) == f(b, a)`.
//! - Case-insensitive.
//! - `f(s, s) == 1.0` for every `s`; a non-empty string against `""` is `0.0`.
//! - The prefix boost never lowers a score.

mod config;
mod error;
mod jaro;

pub use crate::config::{SimilarityConfig, MAX_PREFIX_LEN, MAX_PREFIX_SCALE};
pub use crate::error::SimilarityError;
pub use crate::jaro::{jaro, jaro_winkler, jaro_winkler_with};

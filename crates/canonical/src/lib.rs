//! Canonical field layer for sanctions screening.
//!
//! This crate turns free-text name, address and identifier fields into the
//! comparable form the similarity and matcher layers work on.
//!
//! ## What we do
//!
//! - ASCII lowercasing
//! - Punctuation and any other non-alphanumeric character become delimiters
//! - Whitespace runs collapse to single spaces, edges are trimmed
//! - Optional diacritic folding (NFKD + mark removal) ahead of the above
//! - Digit-only projection for dates of birth and identifier numbers
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Every function here is
//! total: absent or empty input yields an empty string, never an error.

mod config;
mod normalize;
mod whitespace;

pub use crate::config::NormalizeConfig;
pub use crate::normalize::{digits_only, normalize, normalize_with};
pub use crate::whitespace::collapse_whitespace;

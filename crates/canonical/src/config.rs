//! Configuration for field canonicalization.
//!
//! The default configuration reproduces [`normalize`](crate::normalize)
//! exactly. Turning on `fold_diacritics` lets transliterated watchlist
//! entries ("Muller") line up with accented user input ("Müller").
//!
//! ```rust
//! use canonical::{normalize_with, NormalizeConfig};
//!
//! let cfg = NormalizeConfig {
//!     fold_diacritics: true,
//! };
//! assert_eq!(normalize_with("José Müller", &cfg), "jose muller");
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for [`normalize_with`](crate::normalize_with).
///
/// Cheap to copy and serde-friendly so it can be embedded in higher-level
/// screening configs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NormalizeConfig {
    /// If true, apply NFKD decomposition and drop combining marks before the
    /// ASCII filter runs.
    ///
    /// With folding disabled every non-ASCII character becomes a delimiter:
    /// ```text
    /// "Müller" → "m ller"
    /// ```
    /// With folding enabled the base letter survives:
    /// ```text
    /// "Müller" → "muller"
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    #[serde(default)]
    pub fold_diacritics: bool,
}

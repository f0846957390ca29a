//! Tuning knobs for the prefix boost.

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;

/// Upper bound on the prefix scale that keeps boosted scores within [0, 1]
/// for a four character prefix.
pub const MAX_PREFIX_SCALE: f64 = 0.25;

/// Longest shared prefix that earns a boost.
pub const MAX_PREFIX_LEN: usize = 4;

/// Configuration for [`jaro_winkler_with`](crate::jaro_winkler_with).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SimilarityConfig {
    /// Boost applied per shared leading character (`p`).
    #[serde(default = "SimilarityConfig::default_prefix_scale")]
    pub prefix_scale: f64,
    /// Number of leading characters considered for the boost.
    #[serde(default = "SimilarityConfig::default_max_prefix_len")]
    pub max_prefix_len: usize,
}

impl SimilarityConfig {
    pub(crate) fn default_prefix_scale() -> f64 {
        0.1
    }

    pub(crate) fn default_max_prefix_len() -> usize {
        MAX_PREFIX_LEN
    }

    /// Reject settings that could push a boosted score outside [0, 1].
    ///
    /// The scoring functions themselves accept any scale; this check is for
    /// configs loaded from files.
    pub fn validate(&self) -> Result<(), SimilarityError> {
        if !self.prefix_scale.is_finite() || self.prefix_scale < 0.0 {
            return Err(SimilarityError::InvalidConfig(format!(
                "prefix_scale must be a finite, non-negative number, got {}",
                self.prefix_scale
            )));
        }
        if self.prefix_scale > MAX_PREFIX_SCALE {
            return Err(SimilarityError::InvalidConfig(format!(
                "prefix_scale must be <= {MAX_PREFIX_SCALE}, got {}",
                self.prefix_scale
            )));
        }
        if self.max_prefix_len > MAX_PREFIX_LEN {
            return Err(SimilarityError::InvalidConfig(format!(
                "max_prefix_len must be <= {MAX_PREFIX_LEN}, got {}",
                self.max_prefix_len
            )));
        }
        Ok(())
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            prefix_scale: Self::default_prefix_scale(),
            max_prefix_len: Self::default_max_prefix_len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SimilarityConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.prefix_scale, 0.1);
        assert_eq!(cfg.max_prefix_len, 4);
    }

    #[test]
    fn oversized_prefix_scale_rejected() {
        let cfg = SimilarityConfig {
            prefix_scale: 0.3,
            ..Default::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            SimilarityError::InvalidConfig(msg) => assert!(msg.contains("prefix_scale")),
        }
    }

    #[test]
    fn nan_prefix_scale_rejected() {
        let cfg = SimilarityConfig {
            prefix_scale: f64::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn long_prefix_rejected() {
        let cfg = SimilarityConfig {
            max_prefix_len: 6,
            ..Default::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        assert!(err.to_string().contains("max_prefix_len"));
    }
}

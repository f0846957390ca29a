//! Weighting policy for the match scorer.
//!
//! Every constant the scorer multiplies by lives here so the policy can be
//! audited, loaded from config, and swapped without touching comparator
//! logic.

use serde::{Deserialize, Serialize};

use crate::types::MatchError;

/// Weights applied by [`crate::scorer`].
///
/// Name-part weights are renormalized over the parts actually compared.
/// Address-part weights are not: they are summed as given, so a partial
/// address scores lower than a full one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringWeights {
    pub last_name: f64,
    pub first_name: f64,
    pub middle_name: f64,

    pub country: f64,
    pub city: f64,
    pub state: f64,
    pub street: f64,

    /// Multiplier on the name score in the overall score.
    pub name: f64,
    /// Flat bonus for a date-of-birth match.
    pub dob_bonus: f64,
    /// Multiplier on the address score in the overall score.
    pub address: f64,
    /// Flat bonus for an identifier match.
    pub identifier_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            last_name: 0.50,
            first_name: 0.35,
            middle_name: 0.15,
            country: 40.0,
            city: 25.0,
            state: 20.0,
            street: 15.0,
            name: 0.6,
            dob_bonus: 20.0,
            address: 0.15,
            identifier_bonus: 5.0,
        }
    }
}

impl ScoringWeights {
    fn named(&self) -> [(&'static str, f64); 11] {
        [
            ("last_name", self.last_name),
            ("first_name", self.first_name),
            ("middle_name", self.middle_name),
            ("country", self.country),
            ("city", self.city),
            ("state", self.state),
            ("street", self.street),
            ("name", self.name),
            ("dob_bonus", self.dob_bonus),
            ("address", self.address),
            ("identifier_bonus", self.identifier_bonus),
        ]
    }

    /// Every weight must be finite and non-negative.
    pub fn validate(&self) -> Result<(), MatchError> {
        for (field, value) in self.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::InvalidConfig(format!(
                    "weights.{field} must be a finite, non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_are_valid() {
        let w = ScoringWeights::default();
        assert!(w.validate().is_ok());
        assert!((w.last_name + w.first_name + w.middle_name - 1.0).abs() < 1e-9);
        assert!((w.country + w.city + w.state + w.street - 100.0).abs() < 1e-9);
    }

    #[test]
    fn negative_weight_rejected() {
        let w = ScoringWeights {
            city: -1.0,
            ..Default::default()
        };
        let err = w.validate().expect_err("weights should be invalid");
        assert!(err.to_string().contains("weights.city"));
    }

    #[test]
    fn infinite_weight_rejected() {
        let w = ScoringWeights {
            dob_bonus: f64::INFINITY,
            ..Default::default()
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn partial_weights_fill_from_defaults() {
        let w: ScoringWeights =
            serde_json::from_str(r#"{ "dob_bonus": 25.0 }"#).expect("parse weights");
        assert_eq!(w.dob_bonus, 25.0);
        assert_eq!(w.last_name, 0.50);
    }
}

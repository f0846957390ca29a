use serde::{Deserialize, Serialize};
use similarity::{SimilarityConfig, SimilarityError};
use thiserror::Error;

use canonical::{collapse_whitespace, NormalizeConfig};

use crate::source::SourceError;
use crate::weights::ScoringWeights;

/// Minimum overall score used when callers do not pick a threshold.
pub const DEFAULT_THRESHOLD: u32 = 85;

/// A person or entity name split into its three optional parts.
///
/// Absent and empty parts behave the same: they are skipped by the scorer
/// rather than counted as a mismatch (see [`crate::scorer`] for the one
/// asymmetric case).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Name {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub middle: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

impl Name {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: Some(first.into()),
            middle: None,
            last: Some(last.into()),
        }
    }

    /// Entities usually carry their whole name in `last`.
    pub fn last_only(last: impl Into<String>) -> Self {
        Self {
            first: None,
            middle: None,
            last: Some(last.into()),
        }
    }

    pub fn with_middle(mut self, middle: impl Into<String>) -> Self {
        self.middle = Some(middle.into());
        self
    }

    /// True when no part carries any non-whitespace text.
    pub fn is_empty(&self) -> bool {
        [&self.first, &self.middle, &self.last]
            .into_iter()
            .all(|part| part.as_deref().map_or(true, |p| p.trim().is_empty()))
    }

    /// Parts joined with single spaces, in first-middle-last order.
    pub fn full(&self) -> String {
        let joined = [&self.first, &self.middle, &self.last]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect::<Vec<_>>()
            .join(" ");
        collapse_whitespace(&joined)
    }
}

/// Postal address with four optional parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        [&self.street, &self.city, &self.state, &self.country]
            .into_iter()
            .all(|part| part.as_deref().map_or(true, |p| p.trim().is_empty()))
    }
}

/// A typed credential attached to a watchlist record, e.g. a passport.
///
/// `number` is compared on its digits only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identifier {
    pub kind: String,
    pub number: String,
}

impl Identifier {
    pub fn new(kind: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            number: number.into(),
        }
    }
}

/// What the caller wants screened.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Query {
    #[serde(default)]
    pub name: Name,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub id_number: Option<String>,
    /// Restrict to one record category ("individual", "entity", ...).
    /// `None` and `"all"` accept every record.
    #[serde(default)]
    pub category: Option<String>,
}

impl Query {
    pub fn by_name(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            name: Name::new(first, last),
            ..Default::default()
        }
    }

    pub fn with_dob(mut self, dob: impl Into<String>) -> Self {
        self.dob = Some(dob.into());
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_id_number(mut self, number: impl Into<String>) -> Self {
        self.id_number = Some(number.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether a record of `category` passes this query's category filter.
    pub fn accepts_category(&self, category: &str) -> bool {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(filter) if filter.eq_ignore_ascii_case("all") => true,
            Some(filter) => filter.eq_ignore_ascii_case(category.trim()),
        }
    }
}

/// One watchlist entry. Owned by the record store; the engine only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Stable list identifier, when the feed provides one.
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub name: Name,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub identifiers: Vec<Identifier>,
    #[serde(default)]
    pub aliases: Vec<Name>,
    #[serde(default)]
    pub programs: Vec<String>,
}

/// A sub-score in [0, 100] together with the weight it carried into the
/// overall score.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldScore {
    pub score: u32,
    pub weight: f64,
}

/// Per-record scoring outcome, before the record itself is attached.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchScore {
    pub score: u32,
    pub name: FieldScore,
    pub address: FieldScore,
    pub dob_match: bool,
    pub id_match: bool,
    pub reasons: Vec<String>,
    /// Alias whose name score replaced the primary name's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_alias: Option<Name>,
}

/// A candidate that met the search threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub record: CandidateRecord,
    pub score: u32,
    pub name: FieldScore,
    pub address: FieldScore,
    pub dob_match: bool,
    pub id_match: bool,
    pub reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_alias: Option<Name>,
}

impl MatchResult {
    pub fn new(record: CandidateRecord, score: MatchScore) -> Self {
        let MatchScore {
            score,
            name,
            address,
            dob_match,
            id_match,
            reasons,
            matched_alias,
        } = score;
        Self {
            record,
            score,
            name,
            address,
            dob_match,
            id_match,
            reasons,
            matched_alias,
        }
    }
}

/// Outcome of screening a query against a whole candidate source.
///
/// `cleared` is the first-class "nothing at or above threshold" result, not
/// an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreeningReport {
    pub threshold: u32,
    pub candidates_scanned: usize,
    pub cleared: bool,
    pub results: Vec<MatchResult>,
}

/// Configuration for a [`Screener`](crate::Screener).
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Field and signal weights.
    #[serde(default)]
    pub weights: ScoringWeights,
    /// Prefix boost settings for name and address similarity.
    #[serde(default)]
    pub similarity: SimilarityConfig,
    /// Canonicalization applied to every compared text field.
    #[serde(default)]
    pub normalize: NormalizeConfig,
    /// Minimum overall score (inclusive) for a record to be returned.
    #[serde(default = "MatchConfig::default_threshold")]
    pub threshold: u32,
    /// Also score each record's aliases and keep the best name score.
    #[serde(default)]
    pub match_aliases: bool,
    /// Cap on returned results after sorting; `None` returns all.
    #[serde(default)]
    pub max_results: Option<usize>,
    /// Candidate count at which scoring moves onto the rayon pool.
    #[serde(default = "MatchConfig::default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl MatchConfig {
    pub(crate) fn default_threshold() -> u32 {
        DEFAULT_THRESHOLD
    }

    pub(crate) fn default_parallel_threshold() -> usize {
        512
    }

    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Validate the configuration before it is used for screening.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.threshold > 100 {
            return Err(MatchError::InvalidConfig(format!(
                "threshold must be within 0..=100, got {}",
                self.threshold
            )));
        }
        if self.max_results == Some(0) {
            return Err(MatchError::InvalidConfig(
                "max_results must be greater than zero".into(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(MatchError::InvalidConfig(
                "parallel_threshold must be greater than zero".into(),
            ));
        }
        self.weights.validate()?;
        self.similarity.validate()?;
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            similarity: SimilarityConfig::default(),
            normalize: NormalizeConfig::default(),
            threshold: Self::default_threshold(),
            match_aliases: false,
            max_results: None,
            parallel_threshold: Self::default_parallel_threshold(),
        }
    }
}

/// Errors produced by the matching layer.
///
/// Scoring itself never fails; these cover configuration and record access.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Similarity settings failed validation.
    #[error("similarity error: {0}")]
    Similarity(#[from] SimilarityError),
    /// The candidate source could not be read.
    #[error("candidate source error: {0}")]
    Source(#[from] SourceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.threshold, DEFAULT_THRESHOLD);
        assert!(!cfg.match_aliases);
        assert!(cfg.max_results.is_none());
    }

    #[test]
    fn threshold_above_hundred_rejected() {
        let cfg = MatchConfig::with_threshold(101);
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("threshold")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_max_results_rejected() {
        let cfg = MatchConfig {
            max_results: Some(0),
            ..MatchConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("max_results")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_similarity_surfaces_as_similarity_error() {
        let cfg = MatchConfig {
            similarity: SimilarityConfig {
                prefix_scale: 0.5,
                max_prefix_len: 4,
            },
            ..MatchConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(MatchError::Similarity(_))));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: MatchConfig =
            serde_json::from_str(r#"{ "threshold": 90 }"#).expect("parse config");
        assert_eq!(cfg.threshold, 90);
        assert_eq!(cfg.weights, ScoringWeights::default());
        assert_eq!(cfg.parallel_threshold, 512);
    }

    #[test]
    fn category_filter_semantics() {
        let any = Query::by_name("John", "Smith");
        assert!(any.accepts_category("entity"));

        let all = any.clone().with_category("ALL");
        assert!(all.accepts_category("vessel"));

        let individuals = any.with_category("individual");
        assert!(individuals.accepts_category("Individual"));
        assert!(!individuals.accepts_category("entity"));
    }

    #[test]
    fn name_helpers() {
        let name = Name::new(" John ", "Smith").with_middle("");
        assert_eq!(name.full(), "John Smith");
        assert!(!name.is_empty());
        assert!(Name::default().is_empty());
        assert!(Name {
            first: Some("  ".into()),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn record_deserializes_from_sparse_json() {
        let record: CandidateRecord = serde_json::from_str(
            r#"{ "name": { "last": "Bank Melli" }, "category": "entity" }"#,
        )
        .expect("parse record");
        assert_eq!(record.name.last.as_deref(), Some("Bank Melli"));
        assert!(record.identifiers.is_empty());
        assert!(record.address.is_empty());
    }
}

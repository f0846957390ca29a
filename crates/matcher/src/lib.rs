//! # SDN Screen Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` scores a screening [`Query`] against watchlist
//! [`CandidateRecord`]s and returns the ranked records whose overall
//! confidence clears a threshold. It sits on top of `canonical` (field
//! canonicalization) and `similarity` (prefix-boosted Jaro).
//!
//! ## Core Types
//!
//! - [`Query`], [`CandidateRecord`], [`Name`], [`Address`], [`Identifier`]:
//!   the data model. Optional fields are `Option<String>`.
//! - [`ScoringWeights`]: every weight and bonus the scorer applies.
//! - [`MatchConfig`]: weights, similarity and canonicalization settings,
//!   threshold, alias matching, result cap.
//! - [`MatchResult`]: the record, overall score, name and address
//!   [`FieldScore`]s, DOB and identifier flags, and ordered reasons.
//! - [`Screener`]: validated config + threshold-and-rank search.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{search, CandidateRecord, Name, Query};
//!
//! let candidates = vec![
//!     CandidateRecord {
//!         name: Name::new("Jon", "Smith"),
//!         dob: Some("1975-01-01".into()),
//!         ..Default::default()
//!     },
//!     CandidateRecord {
//!         name: Name::new("Alice", "Jones"),
//!         ..Default::default()
//!     },
//! ];
//!
//! let query = Query::by_name("John", "Smith").with_dob("01/01/1975");
//! let hits = search(&query, &candidates, 75);
//! assert_eq!(hits.len(), 1);
//! assert!(hits[0].dob_match);
//! assert_eq!(hits[0].reasons, vec!["Date of birth matches".to_string()]);
//! ```
//!
//! ## Observability
//!
//! Searches emit a `matcher.search` tracing span. Install a
//! [`SearchMetrics`] implementation via [`set_search_metrics`] to record
//! per-search latency and hit counts.

pub mod compare;
pub mod engine;
pub mod metrics;
pub mod scorer;
pub mod source;
pub mod types;
pub mod weights;

#[doc(hidden)]
pub mod demo_utils;

pub use crate::compare::{
    dob_matches, identifier_match, name_part_similarity, name_part_similarity_with, parse_dob,
};
pub use crate::engine::{search, Screener};
pub use crate::metrics::{set_search_metrics, SearchMetrics};
pub use crate::scorer::score_candidate;
pub use crate::source::{CandidateSource, InMemorySource, JsonFileSource, SourceError};
pub use crate::types::{
    Address, CandidateRecord, FieldScore, Identifier, MatchConfig, MatchError, MatchResult,
    MatchScore, Name, Query, ScreeningReport, DEFAULT_THRESHOLD,
};
pub use crate::weights::ScoringWeights;

//! Workspace umbrella crate for sanctions-list screening.
//!
//! This crate stitches together field canonicalization, prefix-boosted Jaro
//! similarity and the matcher so callers can screen a query against a
//! watchlist with a single API entry point, configured from YAML.

pub mod config;

pub use canonical::{NormalizeConfig, collapse_whitespace, digits_only, normalize, normalize_with};
pub use config::{ConfigLoadError, ScreenConfig, SearchYamlConfig};
pub use matcher::{
    Address, CandidateRecord, CandidateSource, DEFAULT_THRESHOLD, FieldScore, Identifier,
    InMemorySource, JsonFileSource, MatchConfig, MatchError, MatchResult, MatchScore, Name,
    Query, Screener, ScoringWeights, ScreeningReport, SearchMetrics, SourceError, dob_matches,
    identifier_match, name_part_similarity, parse_dob, score_candidate, search,
    set_search_metrics,
};
pub use similarity::{SimilarityConfig, SimilarityError, jaro, jaro_winkler, jaro_winkler_with};

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

/// Errors that can occur while running a file-driven screening job.
#[derive(Debug)]
pub enum ScreenRunError {
    Config(ConfigLoadError),
    QueryRead(std::io::Error),
    QueryParse(serde_json::Error),
    Match(MatchError),
}

impl fmt::Display for ScreenRunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenRunError::Config(err) => write!(f, "config failure: {err}"),
            ScreenRunError::QueryRead(err) => write!(f, "failed to read query file: {err}"),
            ScreenRunError::QueryParse(err) => write!(f, "failed to parse query: {err}"),
            ScreenRunError::Match(err) => write!(f, "screening failure: {err}"),
        }
    }
}

impl Error for ScreenRunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScreenRunError::Config(err) => Some(err),
            ScreenRunError::QueryRead(err) => Some(err),
            ScreenRunError::QueryParse(err) => Some(err),
            ScreenRunError::Match(err) => Some(err),
        }
    }
}

impl From<ConfigLoadError> for ScreenRunError {
    fn from(value: ConfigLoadError) -> Self {
        ScreenRunError::Config(value)
    }
}

impl From<MatchError> for ScreenRunError {
    fn from(value: MatchError) -> Self {
        ScreenRunError::Match(value)
    }
}

/// Build a validated [`Screener`] from a loaded configuration.
pub fn screener_from_config(config: ScreenConfig) -> Result<Screener, ScreenRunError> {
    let cfg = config.into_match_config()?;
    Ok(Screener::new(cfg)?)
}

/// Parse a single screening query from JSON.
pub fn query_from_json(json: &str) -> Result<Query, ScreenRunError> {
    serde_json::from_str(json).map_err(ScreenRunError::QueryParse)
}

/// Load a config, a JSON watchlist and a JSON query, and screen the query.
pub fn screen_files(
    config_path: impl AsRef<Path>,
    candidates_path: impl AsRef<Path>,
    query_path: impl AsRef<Path>,
) -> Result<ScreeningReport, ScreenRunError> {
    let start = Instant::now();
    let config = ScreenConfig::from_file(config_path.as_ref())?;
    let screener = screener_from_config(config)?;

    let query_json = fs::read_to_string(query_path.as_ref()).map_err(ScreenRunError::QueryRead)?;
    let query = query_from_json(&query_json)?;

    let source = JsonFileSource::new(candidates_path.as_ref());
    let report = match screener.screen(&query, &source) {
        Ok(report) => report,
        Err(err) => {
            warn!(error = %err, "screen_files_failed");
            return Err(err.into());
        }
    };

    info!(
        scanned = report.candidates_scanned,
        hits = report.results.len(),
        cleared = report.cleared,
        elapsed_micros = start.elapsed().as_micros() as u64,
        "screen_files_complete"
    );
    Ok(report)
}

use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, warn, Level};

use crate::metrics::metrics_recorder;
use crate::scorer::PreparedQuery;
use crate::source::CandidateSource;
use crate::types::{CandidateRecord, MatchConfig, MatchError, MatchResult, Query, ScreeningReport};


/// Score `candidates` against `query` and return those at or above
/// `threshold`, best first.
///
/// Uses default weights and similarity settings. Ties keep input order. An
/// empty candidate collection yields an empty list.
pub fn search<'a, I>(query: &Query, candidates: I, threshold: u32) -> Vec<MatchResult>
where
    I: IntoIterator<Item = &'a CandidateRecord>,
{
    Screener::unchecked(MatchConfig::with_threshold(threshold)).search(query, candidates)
}

/// Threshold-and-rank search over a candidate collection.
///
/// A `Screener` holds a validated [`MatchConfig`]; it keeps no state between
/// searches and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Screener {
    cfg: MatchConfig,
}

impl Screener {
    /// Construct a screener after validating `cfg`.
    pub fn new(cfg: MatchConfig) -> Result<Self, MatchError> {
        if let Err(err) = cfg.validate() {
            warn!(error = %err, "screener_invalid_config");
            return Err(err);
        }
        Ok(Self { cfg })
    }

    /// Skip validation; out-of-range thresholds simply filter everything.
    fn unchecked(cfg: MatchConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Run a search and return ordered results.
    ///
    /// Records outside the query's category filter are skipped. Large
    /// collections are scored on the rayon pool; the merge keeps input order
    /// so the stable sort gives the same ranking either way.
    pub fn search<'a, I>(&self, query: &Query, candidates: I) -> Vec<MatchResult>
    where
        I: IntoIterator<Item = &'a CandidateRecord>,
    {
        let start = Instant::now();
        let candidates: Vec<&CandidateRecord> = candidates.into_iter().collect();
        let scanned = candidates.len();

        let span = tracing::span!(
            Level::INFO,
            "matcher.search",
            candidates = scanned,
            threshold = self.cfg.threshold
        );
        let _guard = span.enter();

        let prepared = PreparedQuery::new(query, &self.cfg);
        let evaluate = |record: &&CandidateRecord| self.evaluate(&prepared, record);

        let mut results: Vec<MatchResult> = if scanned >= self.cfg.parallel_threshold {
            candidates.par_iter().filter_map(evaluate).collect()
        } else {
            candidates.iter().filter_map(evaluate).collect()
        };

        results.sort_by(|a, b| b.score.cmp(&a.score));
        if let Some(limit) = self.cfg.max_results {
            results.truncate(limit);
        }

        let latency = start.elapsed();
        info!(
            scanned,
            hits = results.len(),
            elapsed_micros = latency.as_micros() as u64,
            "search_complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_search(scanned, results.len(), latency);
        }

        results
    }

    /// Fetch every record from `source` and screen `query` against it.
    pub fn screen(
        &self,
        query: &Query,
        source: &dyn CandidateSource,
    ) -> Result<ScreeningReport, MatchError> {
        let records = match source.fetch_all() {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "screen_source_failure");
                return Err(err.into());
            }
        };
        let results = self.search(query, records.iter());
        Ok(ScreeningReport {
            threshold: self.cfg.threshold,
            candidates_scanned: records.len(),
            cleared: results.is_empty(),
            results,
        })
    }

    fn evaluate(
        &self,
        prepared: &PreparedQuery<'_>,
        record: &CandidateRecord,
    ) -> Option<MatchResult> {
        if !prepared.query().accepts_category(&record.category) {
            return None;
        }
        let score = prepared.score(record, &self.cfg);
        if score.score < self.cfg.threshold {
            return None;
        }
        Some(MatchResult::new(record.clone(), score))
    }
}

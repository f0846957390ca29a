//! Match scorer: folds field comparator outputs into one confidence score.
//!
//! ```text
//! name    = round(Σ sim·w / Σ w · 100)      over last, first, middle
//! address = round(Σ sim·w)                  over parts both sides supply
//! overall = round(min(100, name·0.6 + dob·20 + address·0.15 + id·5))
//! ```
//!
//! Last and first name count toward the denominator whenever the query
//! supplies them, even if the record does not. Middle name counts only when
//! both sides supply it.

use canonical::normalize_with;

use crate::compare::{canonical_similarity, dob_matches, identifier_match};
use crate::types::{Address, CandidateRecord, FieldScore, MatchConfig, MatchScore, Name, Query};

/// Reason recorded when the dates of birth agree.
pub const DOB_REASON: &str = "Date of birth matches";

/// Score one record against a query.
pub fn score_candidate(query: &Query, record: &CandidateRecord, cfg: &MatchConfig) -> MatchScore {
    PreparedQuery::new(query, cfg).score(record, cfg)
}

/// Canonical forms of the query's text fields, computed once per search.
#[derive(Debug, Clone)]
pub(crate) struct PreparedQuery<'q> {
    query: &'q Query,
    first: String,
    middle: String,
    last: String,
    address: Option<[String; 4]>,
}

impl<'q> PreparedQuery<'q> {
    pub(crate) fn new(query: &'q Query, cfg: &MatchConfig) -> Self {
        let canon = |part: &Option<String>| {
            part.as_deref()
                .map(|text| normalize_with(text, &cfg.normalize))
                .unwrap_or_default()
        };
        Self {
            query,
            first: canon(&query.name.first),
            middle: canon(&query.name.middle),
            last: canon(&query.name.last),
            address: query.address.as_ref().map(|addr| {
                [
                    canon(&addr.country),
                    canon(&addr.city),
                    canon(&addr.state),
                    canon(&addr.street),
                ]
            }),
        }
    }

    pub(crate) fn query(&self) -> &'q Query {
        self.query
    }

    pub(crate) fn score(&self, record: &CandidateRecord, cfg: &MatchConfig) -> MatchScore {
        let w = &cfg.weights;

        let mut name_score = self.name_score(&record.name, cfg);
        let mut matched_alias = None;
        if cfg.match_aliases {
            for alias in &record.aliases {
                let alias_score = self.name_score(alias, cfg);
                if alias_score > name_score {
                    name_score = alias_score;
                    matched_alias = Some(alias);
                }
            }
        }

        let address_score = self.address_score(&record.address, cfg);
        let dob_match = dob_matches(self.query.dob.as_deref(), record.dob.as_deref());
        let id_hit = identifier_match(self.query.id_number.as_deref(), &record.identifiers);

        let mut reasons = Vec::new();
        if dob_match {
            reasons.push(DOB_REASON.to_string());
        }
        if let Some(id) = id_hit {
            reasons.push(format!("ID number matches ({})", id.kind));
        }
        if let Some(alias) = matched_alias {
            reasons.push(format!("Matched alias: {}", alias.full()));
        }

        let mut raw = name_score as f64 * w.name + address_score as f64 * w.address;
        if dob_match {
            raw += w.dob_bonus;
        }
        if id_hit.is_some() {
            raw += w.identifier_bonus;
        }

        MatchScore {
            score: to_score(raw.min(100.0)),
            name: FieldScore {
                score: name_score,
                weight: w.name,
            },
            address: FieldScore {
                score: address_score,
                weight: w.address,
            },
            dob_match,
            id_match: id_hit.is_some(),
            reasons,
            matched_alias: matched_alias.cloned(),
        }
    }

    fn name_score(&self, name: &Name, cfg: &MatchConfig) -> u32 {
        let w = &cfg.weights;
        let canon = |part: &Option<String>| {
            part.as_deref()
                .map(|text| normalize_with(text, &cfg.normalize))
                .unwrap_or_default()
        };

        let mut weighted = 0.0;
        let mut total = 0.0;

        if !self.last.is_empty() {
            let sim = canonical_similarity(&self.last, &canon(&name.last), &cfg.similarity);
            weighted += w.last_name * sim;
            total += w.last_name;
        }
        if !self.first.is_empty() {
            let sim = canonical_similarity(&self.first, &canon(&name.first), &cfg.similarity);
            weighted += w.first_name * sim;
            total += w.first_name;
        }
        if !self.middle.is_empty() {
            let middle = canon(&name.middle);
            if !middle.is_empty() {
                let sim = canonical_similarity(&self.middle, &middle, &cfg.similarity);
                weighted += w.middle_name * sim;
                total += w.middle_name;
            }
        }

        if total == 0.0 {
            return 0;
        }
        to_score(weighted / total * 100.0)
    }

    fn address_score(&self, address: &Address, cfg: &MatchConfig) -> u32 {
        let Some(query_parts) = &self.address else {
            return 0;
        };
        let w = &cfg.weights;
        let record_parts = [
            (&address.country, w.country),
            (&address.city, w.city),
            (&address.state, w.state),
            (&address.street, w.street),
        ];

        let mut sum = 0.0;
        let mut compared = false;
        for (query_part, (record_part, weight)) in query_parts.iter().zip(record_parts) {
            if query_part.is_empty() {
                continue;
            }
            let record_part = record_part
                .as_deref()
                .map(|text| normalize_with(text, &cfg.normalize))
                .unwrap_or_default();
            if record_part.is_empty() {
                continue;
            }
            sum += canonical_similarity(query_part, &record_part, &cfg.similarity) * weight;
            compared = true;
        }

        if !compared {
            return 0;
        }
        to_score(sum)
    }
}

/// Round half away from zero and bound to [0, 100].
fn to_score(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u32
}

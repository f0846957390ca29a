//! Field comparators.
//!
//! Each comparator is total: absent, empty or malformed input degrades to a
//! zero similarity or a `false` match, never an error.

use chrono::NaiveDate;

use canonical::{digits_only, normalize_with, NormalizeConfig};
use similarity::{jaro_winkler_with, SimilarityConfig};

use crate::types::Identifier;

/// Date layouts tried, in order, when digit-only forms differ.
///
/// Slash and dash layouts with a leading two-digit group are read month
/// first; dotted layouts are read day first.
const DOB_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

/// Similarity of one name (or address) part in [0, 1] under default settings.
///
/// Both sides are canonicalized first; an empty side scores 0 so that absence
/// never counts as agreement.
pub fn name_part_similarity(a: Option<&str>, b: Option<&str>) -> f64 {
    name_part_similarity_with(
        a,
        b,
        &NormalizeConfig::default(),
        &SimilarityConfig::default(),
    )
}

/// [`name_part_similarity`] with explicit canonicalization and boost settings.
pub fn name_part_similarity_with(
    a: Option<&str>,
    b: Option<&str>,
    normalize: &NormalizeConfig,
    similarity: &SimilarityConfig,
) -> f64 {
    let a = a.map(|text| normalize_with(text, normalize)).unwrap_or_default();
    let b = b.map(|text| normalize_with(text, normalize)).unwrap_or_default();
    canonical_similarity(&a, &b, similarity)
}

/// Similarity of two already-canonical strings.
pub(crate) fn canonical_similarity(a: &str, b: &str, similarity: &SimilarityConfig) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    jaro_winkler_with(a, b, similarity)
}

/// Whether two date-of-birth strings denote the same calendar day.
///
/// Identical non-empty digit sequences match outright, which covers the same
/// date written with different separators. Otherwise both strings are parsed
/// against [`DOB_FORMATS`] and compared by year, month and day. Partial dates
/// get no credit.
pub fn dob_matches(a: Option<&str>, b: Option<&str>) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    if a.trim().is_empty() || b.trim().is_empty() {
        return false;
    }

    let a_digits = digits_only(a);
    if !a_digits.is_empty() && a_digits == digits_only(b) {
        return true;
    }

    match (parse_dob(a), parse_dob(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Parse a date-of-birth string as a calendar date.
pub fn parse_dob(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DOB_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// First identifier (in storage order) whose digits equal the query's.
///
/// A query without digits matches nothing; candidate identifiers without
/// digits are skipped.
pub fn identifier_match<'a>(
    query_number: Option<&str>,
    identifiers: &'a [Identifier],
) -> Option<&'a Identifier> {
    let wanted = digits_only(query_number?);
    if wanted.is_empty() {
        return None;
    }
    identifiers.iter().find(|id| {
        let digits = digits_only(&id.number);
        !digits.is_empty() && digits == wanted
    })
}

//! Jaro and prefix-boosted (Jaro-Winkler) similarity.
//!
//! Both functions fold case before comparing and operate on `char`s, so the
//! lengths used in the formulas are character counts, not byte counts.

use crate::config::SimilarityConfig;

/// Base Jaro similarity in [0, 1].
///
/// - Identical strings (after lower-casing) score exactly `1.0`, including
///   two empty strings.
/// - Otherwise an empty side scores exactly `0.0`.
///
/// The alignment window is `floor(max(len1, len2) / 2) - 1`, clipped at
/// zero. Each character of `a` claims the first unclaimed equal character of
/// `b` inside the window. Half of the out-of-order matched pairs are
/// subtracted as transpositions.
///
/// ```rust
/// use similarity::jaro;
///
/// let score = jaro("martha", "marhta");
/// assert!((score - 0.9444).abs() < 1e-3);
/// ```
pub fn jaro(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let b: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();
    jaro_chars(&a, &b)
}

/// Prefix-boosted similarity with the default scale (0.1) and prefix cap (4).
///
/// ```rust
/// use similarity::{jaro, jaro_winkler};
///
/// assert!(jaro_winkler("mohammed", "mohamed") > jaro("mohammed", "mohamed"));
/// assert_eq!(jaro_winkler("smith", "SMITH"), 1.0);
/// assert_eq!(jaro_winkler("smith", ""), 0.0);
/// ```
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    jaro_winkler_with(a, b, &SimilarityConfig::default())
}

/// Prefix-boosted similarity: `base + prefix_len * p * (1 - base)`.
///
/// The scale is applied as given; only [`SimilarityConfig::validate`] enforces
/// the conventional 0.25 cap. The result is clamped to [0, 1].
pub fn jaro_winkler_with(a: &str, b: &str, cfg: &SimilarityConfig) -> f64 {
    let a: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let b: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();

    let base = jaro_chars(&a, &b);
    if base == 0.0 || base == 1.0 {
        return base;
    }

    let prefix_len = a
        .iter()
        .zip(b.iter())
        .take(cfg.max_prefix_len)
        .take_while(|(x, y)| x == y)
        .count();

    let boosted = base + prefix_len as f64 * cfg.prefix_scale * (1.0 - base);
    boosted.clamp(0.0, 1.0)
}

fn jaro_chars(a: &[char], b: &[char]) -> f64 {
    if a == b {
        return 1.0;
    }
    let a_len = a.len();
    let b_len = b.len();
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    // A negative window only arises when the longer side has one character;
    // clipping it to zero gives the same scores since a lone differing
    // character cannot match at offset zero either.
    let window = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matched = vec![false; a_len];
    let mut b_matched = vec![false; b_len];
    let mut matches = 0usize;

    for (i, ch) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b_len);
        for j in start..end {
            if b_matched[j] || b[j] != *ch {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let a_seq = a
        .iter()
        .zip(a_matched.iter())
        .filter_map(|(ch, hit)| hit.then_some(ch));
    let b_seq = b
        .iter()
        .zip(b_matched.iter())
        .filter_map(|(ch, hit)| hit.then_some(ch));
    let out_of_order = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();

    let m = matches as f64;
    let transpositions = out_of_order as f64 / 2.0;
    (m / a_len as f64 + m / b_len as f64 + (m - transpositions) / m) / 3.0
}

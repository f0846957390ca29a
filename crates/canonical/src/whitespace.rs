//! Whitespace normalization.
//!
//! Uses Unicode's definition of whitespace (tabs, newlines, non-breaking
//! spaces, ...). The result never has leading or trailing whitespace.
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  Bank   Melli\tIran  "), "Bank Melli Iran");
//! ```

/// Collapses repeated whitespace into single ASCII spaces and trims edges.
///
/// Case and punctuation are untouched; use [`normalize`](crate::normalize)
/// for the full canonical form. Display names are passed through this before
/// being echoed back in match reasons.
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

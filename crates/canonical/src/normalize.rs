use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;

/// Canonicalizes a free-text field into its comparable form.
///
/// Lower-cases ASCII letters, turns every character that is not an ASCII
/// letter, digit, or whitespace into a delimiter, collapses delimiter runs to
/// a single space, and trims both ends. Empty input yields an empty string.
///
/// ```rust
/// use canonical::normalize;
///
/// assert_eq!(normalize("O'Brien-Smith  Jr."), "o brien smith jr");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(text: &str) -> String {
    let mut canonical = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        dispatch_char(ch, &mut canonical, &mut pending_space);
    }
    canonical
}

/// Same as [`normalize`], with optional diacritic folding applied first.
pub fn normalize_with(text: &str, cfg: &NormalizeConfig) -> String {
    // Borrow when folding is off so the default path never allocates twice.
    let source: Cow<str> = if cfg.fold_diacritics {
        Cow::Owned(text.nfkd().filter(|ch| !ch.is_mark()).collect())
    } else {
        Cow::Borrowed(text)
    };
    normalize(source.as_ref())
}

/// Keeps only the ASCII digits of `text`.
///
/// Dates and identifier numbers are compared on this form so that
/// `"AB-123 456"` and `"123456"` line up.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

fn dispatch_char(ch: char, canonical: &mut String, pending_space: &mut bool) {
    if ch.is_ascii_alphanumeric() {
        if *pending_space {
            canonical.push(' ');
            *pending_space = false;
        }
        canonical.push(ch.to_ascii_lowercase());
    } else if !canonical.is_empty() {
        // Leading delimiters never produce a space; trailing ones stay pending
        // and are dropped when the input ends.
        *pending_space = true;
    }
}

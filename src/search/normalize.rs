//! Text normalization for accent- and case-insensitive comparison.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercase `text`, decompose it (NFD) and drop every combining mark.
///
/// "Été" and "ete" normalize to the same string. Arabic harakat are
/// combining marks too, so vocalized and bare Arabic compare equal.
/// The function is idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    if text.is_ascii() {
        return text.to_ascii_lowercase();
    }
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

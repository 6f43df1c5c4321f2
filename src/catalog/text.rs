//! ASCII text normalization shared by validation and search.
//!
//! Whitespace and case folding follow the C locale: only ASCII whitespace
//! (including vertical tab) is trimmed and only ASCII letters are folded.

/// Returns `true` for the characters treated as whitespace when trimming.
fn is_blank(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Returns `value` without leading or trailing ASCII whitespace.
#[must_use]
pub fn trim(value: &str) -> &str {
    value.trim_matches(is_blank)
}

/// Returns an ASCII-lowercased copy of `value`.
#[must_use]
pub fn fold_case(value: &str) -> String {
    value.to_ascii_lowercase()
}

/// Compares two strings for equality ignoring ASCII case.
#[must_use]
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.eq_ignore_ascii_case(right)
}

/// Checks whether `haystack` contains `folded_needle`, ignoring ASCII case.
///
/// The needle must already be folded with [`fold_case`].
#[must_use]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold_case(haystack).contains(folded_needle)
}

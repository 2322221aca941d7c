//! Answer comparison.

/// Returns `true` if `given` matches `expected`, ignoring letter case and
/// leading/trailing whitespace. Inner whitespace must match exactly.
#[must_use]
pub fn is_correct(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}

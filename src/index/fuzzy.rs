//! Fuzzy key normalization

/// Canonical form of a key: lower-cased, `-` and `_` removed.
///
/// Used both when writing aliases and when computing the fallback lookup
/// key, so the two always agree.
pub fn normalize(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

//! Word splitting and normalization helpers.

/// Split text into words on any whitespace. Tabs and newlines are separators,
/// never part of a word; punctuation is kept.
pub fn split(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Remove ASCII punctuation from a word.
pub fn remove_punctuation(word: &str) -> String {
    word.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Lowercase a word.
pub fn lower(word: &str) -> String {
    word.to_lowercase()
}

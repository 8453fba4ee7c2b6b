//! Accuracy and speed scoring for a typed transcript.

use crate::error::{Result, TypingError};
use crate::text::split;
use crate::types::TypingScore;

/// Characters counted as one standardized word.
pub const CHARS_PER_WORD: f64 = 5.0;

/// Percentage of typed words that match the reference word at the same position.
///
/// Comparison is exact (case and punctuation matter) and strictly positional:
/// a skipped or inserted word shifts every later word out of alignment.
pub fn accuracy(typed: &str, reference: &str) -> f64 {
    let typed_words = split(typed);
    let reference_words = split(reference);

    if typed_words.is_empty() {
        return if reference_words.is_empty() { 100.0 } else { 0.0 };
    }

    let correct = typed_words
        .iter()
        .zip(&reference_words)
        .filter(|(typed, reference)| typed == reference)
        .count();

    100.0 * correct as f64 / typed_words.len() as f64
}

/// Words per minute of `typed`, counting every five characters as one word.
pub fn wpm(typed: &str, elapsed_seconds: f64) -> Result<f64> {
    if elapsed_seconds.is_nan() || elapsed_seconds <= 0.0 {
        return Err(TypingError::InvalidArgument(format!(
            "elapsed time must be positive, got {elapsed_seconds}"
        )));
    }

    let words = typed.chars().count() as f64 / CHARS_PER_WORD;
    let wpm = words / (elapsed_seconds / 60.0);
    if !wpm.is_finite() {
        return Err(TypingError::InvalidArgument(format!(
            "elapsed time {elapsed_seconds} is too short to measure"
        )));
    }

    Ok(wpm)
}

/// Speed and accuracy of `typed` against `reference`.
pub fn score(typed: &str, reference: &str, elapsed_seconds: f64) -> Result<TypingScore> {
    Ok(TypingScore {
        wpm: wpm(typed, elapsed_seconds)?,
        accuracy: accuracy(typed, reference),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_identical_transcripts() {
        assert_eq!(accuracy("Cute Dog.", "Cute Dog."), 100.0);
        assert_eq!(accuracy("a  b\tc", "a b c"), 100.0);
    }

    #[test]
    fn accuracy_is_positional() {
        assert_eq!(accuracy("Cute Dog!", "Cute Dog."), 50.0);
        assert_eq!(accuracy("A Cute Dog!", "Cute Dog."), 0.0);
        assert_eq!(accuracy("a b c d", "b a c d"), 50.0);
        assert_eq!(accuracy("a d", "a b c d"), 50.0);
        assert_eq!(accuracy("b c d", "a b c d"), 0.0);
    }

    #[test]
    fn accuracy_case_and_punctuation_sensitive() {
        assert_eq!(accuracy("cute Dog.", "Cute Dog."), 50.0);
        assert_eq!(accuracy("Cat", "cat"), 0.0);
        assert_eq!(accuracy("cats.", "cats"), 0.0);
    }

    #[test]
    fn accuracy_extra_words_count_against() {
        assert_eq!(accuracy("Cute Dog. I say!", "Cute Dog."), 50.0);
        assert_eq!(accuracy("Cute", "Cute Dog."), 100.0);
    }

    #[test]
    fn accuracy_empty_typed() {
        assert_eq!(accuracy("", "Cute Dog."), 0.0);
        assert_eq!(accuracy("", ""), 100.0);
        assert_eq!(accuracy(" \t", ""), 100.0);
    }

    #[test]
    fn wpm_standard_words() {
        assert_eq!(wpm("hello friend hello buddy hello", 15.0).unwrap(), 24.0);
        assert_eq!(wpm("0123456789", 60.0).unwrap(), 2.0);
        assert_eq!(wpm("", 10.0).unwrap(), 0.0);
    }

    #[test]
    fn wpm_counts_characters_not_bytes() {
        assert_eq!(wpm("ééééé", 60.0).unwrap(), 1.0);
    }

    #[test]
    fn wpm_scales_with_elapsed() {
        let typed = "the quick brown fox jumps";
        let fast = wpm(typed, 10.0).unwrap();
        let slow = wpm(typed, 20.0).unwrap();
        assert!(fast > slow);
        assert!((fast - slow * 2.0).abs() < 1e-9);
    }

    #[test]
    fn wpm_rejects_non_positive_elapsed() {
        for elapsed in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                wpm("hello", elapsed),
                Err(TypingError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn wpm_rejects_unmeasurably_short_elapsed() {
        assert!(matches!(
            wpm("hello", 1e-320),
            Err(TypingError::InvalidArgument(_))
        ));
        assert_eq!(wpm("", 1e-320).unwrap(), 0.0);
    }

    #[test]
    fn score_combines_both() {
        let score = score("Cute Dog!", "Cute Dog.", 60.0).unwrap();
        assert_eq!(score.accuracy, 50.0);
        assert_eq!(score.wpm, 9.0 / 5.0);
        assert!(super::score("x", "x", 0.0).is_err());
    }
}

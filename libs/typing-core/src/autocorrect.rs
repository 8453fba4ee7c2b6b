//! Autocorrect for mistyped words.

use crate::diff::DiffResult;
use crate::error::{Result, TypingError};
use crate::text::split;
use crate::types::AutocorrectSettings;

/// Return the word in `word_list` closest to `typed_word` under `diff`.
///
/// `typed_word` itself is returned when it appears in `word_list`, or when
/// even the closest candidate costs more than `limit`. Ties go to the
/// candidate that comes first in `word_list`.
pub fn autocorrect<S, F>(typed_word: &str, word_list: &[S], diff: F, limit: usize) -> Result<String>
where
    S: AsRef<str>,
    F: Fn(&str, &str, usize) -> DiffResult,
{
    if word_list.is_empty() {
        return Err(TypingError::InvalidArgument(
            "autocorrect needs at least one candidate word".to_string(),
        ));
    }

    if word_list.iter().any(|word| word.as_ref() == typed_word) {
        return Ok(typed_word.to_string());
    }

    let mut closest: Option<(&str, DiffResult)> = None;
    for candidate in word_list {
        let candidate = candidate.as_ref();
        let cost = diff(typed_word, candidate, limit);
        if closest.map_or(true, |(_, best)| cost < best) {
            closest = Some((candidate, cost));
        }
    }

    match closest {
        Some((candidate, cost)) if cost.is_within(limit) => {
            tracing::trace!(typed_word, candidate, ?cost, "autocorrected");
            Ok(candidate.to_string())
        }
        _ => Ok(typed_word.to_string()),
    }
}

/// Autocorrect using configured settings.
pub fn autocorrect_with<S: AsRef<str>>(
    typed_word: &str,
    word_list: &[S],
    settings: &AutocorrectSettings,
) -> Result<String> {
    let algorithm = settings.algorithm;
    autocorrect(
        typed_word,
        word_list,
        |start, goal, limit| algorithm.diff(start, goal, limit),
        settings.limit,
    )
}

/// Autocorrect every word of a typed text.
pub fn autocorrect_transcript<S, F>(
    typed: &str,
    word_list: &[S],
    diff: F,
    limit: usize,
) -> Result<Vec<String>>
where
    S: AsRef<str>,
    F: Fn(&str, &str, usize) -> DiffResult,
{
    split(typed)
        .into_iter()
        .map(|word| autocorrect(word, word_list, &diff, limit))
        .collect()
}

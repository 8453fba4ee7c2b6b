//! Paragraph selection for typing prompts.

use crate::error::{Result, TypingError};
use crate::text::{lower, remove_punctuation, split};

/// Return the `k`-th paragraph (0-based) accepted by `select`.
pub fn choose<'a, S, F>(paragraphs: &'a [S], select: F, k: usize) -> Option<&'a str>
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    paragraphs
        .iter()
        .map(AsRef::as_ref)
        .filter(|paragraph| select(*paragraph))
        .nth(k)
}

/// Build a selector accepting paragraphs that mention any word of `topic`.
///
/// Paragraph words are compared with punctuation removed and lowercased.
/// Topic words must already be lowercase.
pub fn about<S: AsRef<str>>(topic: &[S]) -> Result<impl Fn(&str) -> bool> {
    if let Some(word) = topic
        .iter()
        .map(AsRef::as_ref)
        .find(|word| lower(word) != *word)
    {
        return Err(TypingError::InvalidArgument(format!(
            "topic word {word:?} should be lowercase"
        )));
    }

    let topic: Vec<String> = topic.iter().map(|word| word.as_ref().to_string()).collect();

    Ok(move |paragraph: &str| {
        split(paragraph).into_iter().any(|word| {
            let word = lower(&remove_punctuation(word));
            topic.iter().any(|topic_word| *topic_word == word)
        })
    })
}

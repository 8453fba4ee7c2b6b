//! Multiplayer race timing.
//!
//! A [`Match`] records, for each player in arrival order, how long they took
//! to type each word of the prompt. It is validated once on construction and
//! read-only afterwards; every derivation returns fresh data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Axis, Result, TypingError};
use crate::types::ProgressRecord;

/// Words typed in a race and each player's duration per word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatch")]
pub struct Match {
    words: Vec<String>,
    /// `times[player][word]`
    times: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct RawMatch {
    words: Vec<String>,
    times: Vec<Vec<f64>>,
}

impl TryFrom<RawMatch> for Match {
    type Error = TypingError;

    fn try_from(raw: RawMatch) -> Result<Self> {
        Self::new(raw.words, raw.times)
    }
}

impl Match {
    /// Create a match from per-word durations.
    ///
    /// Every player needs exactly one finite, non-negative duration per word.
    pub fn new(words: Vec<String>, times: Vec<Vec<f64>>) -> Result<Self> {
        for (player, player_times) in times.iter().enumerate() {
            if player_times.len() != words.len() {
                return Err(TypingError::DataIntegrity(format!(
                    "there should be one time per word: player {player} has {} times for {} words",
                    player_times.len(),
                    words.len()
                )));
            }
            for (index, &time) in player_times.iter().enumerate() {
                if !time.is_finite() {
                    return Err(TypingError::DataIntegrity(format!(
                        "times lists should contain numbers: player {player} word {index} is {time}"
                    )));
                }
                if time < 0.0 {
                    return Err(TypingError::DataIntegrity(format!(
                        "times should be non-negative: player {player} word {index} is {time}"
                    )));
                }
            }
        }

        Ok(Self { words, times })
    }

    /// Build a match from raw timestamps.
    ///
    /// Each player's stream holds the start time followed by the time each
    /// word was finished, so it has one more entry than there are words.
    pub fn from_timestamps(words: Vec<String>, timestamps_per_player: &[Vec<f64>]) -> Result<Self> {
        let expected = words.len() + 1;
        let mut times: Vec<Vec<f64>> = Vec::with_capacity(timestamps_per_player.len());

        for (player, timestamps) in timestamps_per_player.iter().enumerate() {
            if timestamps.len() != expected {
                return Err(TypingError::DataIntegrity(format!(
                    "player {player} has {} timestamps, expected {expected} (start plus one per word)",
                    timestamps.len()
                )));
            }
            times.push(timestamps.windows(2).map(|pair| pair[1] - pair[0]).collect());
        }

        tracing::debug!(
            players = times.len(),
            words = words.len(),
            "built match from timestamps"
        );
        Self::new(words, times)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn times(&self) -> &[Vec<f64>] {
        &self.times
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn player_count(&self) -> usize {
        self.times.len()
    }

    /// The word at `word_index`.
    pub fn word_at(&self, word_index: usize) -> Result<&str> {
        self.words
            .get(word_index)
            .map(String::as_str)
            .ok_or(TypingError::IndexOutOfRange {
                axis: Axis::Word,
                index: word_index,
                len: self.words.len(),
            })
    }

    /// How long `player` took to type the word at `word_index`.
    pub fn time_at(&self, player: usize, word_index: usize) -> Result<f64> {
        if word_index >= self.words.len() {
            return Err(TypingError::IndexOutOfRange {
                axis: Axis::Word,
                index: word_index,
                len: self.words.len(),
            });
        }
        let player_times = self.times.get(player).ok_or(TypingError::IndexOutOfRange {
            axis: Axis::Player,
            index: player,
            len: self.times.len(),
        })?;
        Ok(player_times[word_index])
    }

    /// The words each player typed fastest, in prompt order.
    ///
    /// When several players share the minimum time for a word, the player who
    /// joined first gets it.
    pub fn fastest_words(&self) -> Vec<Vec<String>> {
        let mut fastest = vec![Vec::new(); self.times.len()];
        if self.times.is_empty() {
            return fastest;
        }

        for (index, word) in self.words.iter().enumerate() {
            let mut winner = 0;
            for player in 1..self.times.len() {
                if self.times[player][index] < self.times[winner][index] {
                    winner = player;
                }
            }
            fastest[winner].push(word.clone());
        }

        fastest
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match({:?}, [", self.words)?;
        for (player, player_times) in self.times.iter().enumerate() {
            if player > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (index, time) in player_times.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{time}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("])")
    }
}

/// Report how much of `prompt` has been typed correctly so far.
///
/// Progress is the length of the correct prefix of `sofar` divided by the
/// prompt length; words after the first mistake earn nothing. The record is
/// handed to `upload` before the fraction is returned. An empty prompt counts
/// as complete.
pub fn report_progress<S, P, U>(sofar: &[S], prompt: &[P], user_id: u64, upload: U) -> f64
where
    S: AsRef<str>,
    P: AsRef<str>,
    U: FnOnce(ProgressRecord),
{
    let correct = sofar
        .iter()
        .zip(prompt)
        .take_while(|&(typed, expected)| typed.as_ref() == expected.as_ref())
        .count();

    let progress = if prompt.is_empty() {
        1.0
    } else {
        correct as f64 / prompt.len() as f64
    };

    upload(ProgressRecord {
        id: user_id,
        progress,
    });
    progress
}

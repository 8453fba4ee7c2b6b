//! Core types for typing tests and races.

use serde::{Deserialize, Serialize};

use crate::diff::{self, DiffResult};

/// Diff function used by autocorrect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffAlgorithm {
    /// Substitutions only, plus the length difference.
    SphinxSwaps,
    /// Insert, delete and substitute.
    MinimumMewtations,
    /// Insert, delete, substitute and adjacent transposition.
    FinalDiff,
}

impl Default for DiffAlgorithm {
    fn default() -> Self {
        Self::FinalDiff
    }
}

impl DiffAlgorithm {
    /// Get the algorithm name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SphinxSwaps => "sphinx_swaps",
            Self::MinimumMewtations => "minimum_mewtations",
            Self::FinalDiff => "final_diff",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sphinx_swaps" => Some(Self::SphinxSwaps),
            "minimum_mewtations" => Some(Self::MinimumMewtations),
            "final_diff" => Some(Self::FinalDiff),
            _ => None,
        }
    }

    /// Limit used when a caller does not choose one.
    pub fn default_limit(&self) -> usize {
        match self {
            Self::SphinxSwaps | Self::MinimumMewtations => 2,
            Self::FinalDiff => 6,
        }
    }

    /// Run this algorithm.
    pub fn diff(&self, start: &str, goal: &str, limit: usize) -> DiffResult {
        match self {
            Self::SphinxSwaps => diff::sphinx_swaps(start, goal, limit),
            Self::MinimumMewtations => diff::minimum_mewtations(start, goal, limit),
            Self::FinalDiff => diff::final_diff(start, goal, limit),
        }
    }
}

/// Autocorrect configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocorrectSettings {
    pub algorithm: DiffAlgorithm,
    pub limit: usize,
}

impl Default for AutocorrectSettings {
    fn default() -> Self {
        let algorithm = DiffAlgorithm::default();
        Self {
            algorithm,
            limit: algorithm.default_limit(),
        }
    }
}

impl AutocorrectSettings {
    /// Settings for an algorithm at its default limit.
    pub fn for_algorithm(algorithm: DiffAlgorithm) -> Self {
        Self {
            algorithm,
            limit: algorithm.default_limit(),
        }
    }

    /// Apply optional overrides on top of these settings.
    ///
    /// An algorithm override without a limit uses that algorithm's default limit.
    pub fn merge(&self, algorithm: Option<DiffAlgorithm>, limit: Option<usize>) -> Self {
        match (algorithm, limit) {
            (Some(algorithm), Some(limit)) => Self { algorithm, limit },
            (Some(algorithm), None) => Self::for_algorithm(algorithm),
            (None, Some(limit)) => Self {
                algorithm: self.algorithm,
                limit,
            },
            (None, None) => *self,
        }
    }
}

/// Speed and accuracy of a typed transcript.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypingScore {
    pub wpm: f64,
    pub accuracy: f64,
}

/// Progress of one player through a race prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub id: u64,
    pub progress: f64,
}

//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from typing-core
pub use typing_core::{AutocorrectSettings, DiffAlgorithm, ProgressRecord, TypingScore};

// === Typing Test Types ===

/// Request to score a typed transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub typed: String,
    pub reference: String,
    pub elapsed_seconds: f64,
}

/// Request to autocorrect a word
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocorrectRequest {
    pub word: String,
    pub word_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<DiffAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Autocorrect result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocorrectResponse {
    pub word: String,
    pub corrected: String,
    pub algorithm: DiffAlgorithm,
    pub limit: usize,
}

// === Race Types ===

/// Request to open a race
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRaceRequest {
    pub prompt: String,
}

/// Progress report from a player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRequest {
    pub player_id: u64,
    /// Everything the player has typed so far
    pub typed: String,
}

/// A player's timestamps once they finish the prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishRequest {
    pub player_id: u64,
    /// Start time followed by the time each word was finished
    pub timestamps: Vec<f64>,
}

/// Player entry in a race summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: u64,
    pub progress: f64,
    pub finished: bool,
}

/// Race state returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceSummary {
    pub id: Uuid,
    pub prompt: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub players: Vec<PlayerSummary>,
}

/// Words a player typed fastest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerFastestWords {
    pub id: u64,
    pub words: Vec<String>,
}

/// Fastest words for every finished player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastestWordsResponse {
    pub words: Vec<String>,
    pub players: Vec<PlayerFastestWords>,
}

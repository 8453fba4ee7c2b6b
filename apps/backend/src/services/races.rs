//! In-memory multiplayer race state.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use typing_core::{report_progress, split, Match, ProgressRecord};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{FastestWordsResponse, PlayerFastestWords, PlayerSummary, RaceSummary};

#[derive(Debug, Clone)]
struct Player {
    id: u64,
    progress: f64,
    /// Set once the player finishes the prompt
    timestamps: Option<Vec<f64>>,
}

/// A shared typing exercise.
#[derive(Debug, Clone)]
pub struct Race {
    pub id: Uuid,
    pub prompt: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Arrival order
    players: Vec<Player>,
}

impl Race {
    fn new(prompt: &str) -> Result<Self> {
        let prompt: Vec<String> = split(prompt).into_iter().map(str::to_string).collect();
        if prompt.is_empty() {
            return Err(ApiError::BadRequest("prompt has no words".to_string()));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            prompt,
            created_at: Utc::now(),
            players: Vec::new(),
        })
    }

    fn summary(&self) -> RaceSummary {
        RaceSummary {
            id: self.id,
            prompt: self.prompt.clone(),
            created_at: self.created_at,
            players: self
                .players
                .iter()
                .map(|p| PlayerSummary {
                    id: p.id,
                    progress: p.progress,
                    finished: p.timestamps.is_some(),
                })
                .collect(),
        }
    }

    fn fastest_words(&self) -> Result<FastestWordsResponse> {
        let finished: Vec<(u64, Vec<f64>)> = self
            .players
            .iter()
            .filter_map(|p| p.timestamps.clone().map(|t| (p.id, t)))
            .collect();

        if finished.is_empty() {
            return Err(ApiError::Unprocessable(
                "no player has finished the race".to_string(),
            ));
        }

        let timestamps: Vec<Vec<f64>> = finished.iter().map(|(_, t)| t.clone()).collect();
        let race_match = Match::from_timestamps(self.prompt.clone(), &timestamps)?;

        let players = finished
            .into_iter()
            .zip(race_match.fastest_words())
            .map(|((id, _), words)| PlayerFastestWords { id, words })
            .collect();

        Ok(FastestWordsResponse {
            words: race_match.words().to_vec(),
            players,
        })
    }
}

/// Find a player by id, adding them on first arrival.
fn player_entry(players: &mut Vec<Player>, id: u64) -> &mut Player {
    let index = match players.iter().position(|p| p.id == id) {
        Some(index) => index,
        None => {
            players.push(Player {
                id,
                progress: 0.0,
                timestamps: None,
            });
            players.len() - 1
        }
    };
    &mut players[index]
}

/// Store a reported progress record on the race.
///
/// Finished players keep their final progress.
fn upload(players: &mut Vec<Player>, record: ProgressRecord) {
    let player = player_entry(players, record.id);
    if player.timestamps.is_none() {
        player.progress = record.progress;
    }
}

/// All open races, keyed by id.
#[derive(Debug, Default)]
pub struct RaceStore {
    races: RwLock<HashMap<Uuid, Race>>,
}

impl RaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a race over the words of `prompt`.
    pub async fn create(&self, prompt: &str) -> Result<RaceSummary> {
        let race = Race::new(prompt)?;
        let summary = race.summary();

        tracing::info!("Opened race {} with {} words", race.id, race.prompt.len());
        self.races.write().await.insert(race.id, race);

        Ok(summary)
    }

    pub async fn get(&self, id: Uuid) -> Result<RaceSummary> {
        let races = self.races.read().await;
        races.get(&id).map(Race::summary).ok_or_else(|| not_found(id))
    }

    /// Record how far `player_id` has typed correctly.
    pub async fn report_progress(
        &self,
        id: Uuid,
        player_id: u64,
        typed: &str,
    ) -> Result<ProgressRecord> {
        let mut races = self.races.write().await;
        let race = races.get_mut(&id).ok_or_else(|| not_found(id))?;

        let sofar = split(typed);
        let Race {
            prompt, players, ..
        } = race;
        report_progress(&sofar, prompt.as_slice(), player_id, |record| {
            upload(players, record)
        });
        let progress = player_entry(players, player_id).progress;

        tracing::debug!("Player {} progress in race {}: {}", player_id, id, progress);

        Ok(ProgressRecord {
            id: player_id,
            progress,
        })
    }

    /// Store a player's timestamps once they have typed the whole prompt.
    pub async fn finish(&self, id: Uuid, player_id: u64, timestamps: Vec<f64>) -> Result<RaceSummary> {
        let mut races = self.races.write().await;
        let race = races.get_mut(&id).ok_or_else(|| not_found(id))?;

        // Reject streams that could not build a match.
        Match::from_timestamps(race.prompt.clone(), std::slice::from_ref(&timestamps))?;

        let player = player_entry(&mut race.players, player_id);
        if player.timestamps.is_some() {
            return Err(ApiError::BadRequest(format!(
                "player {} already finished race {}",
                player_id, id
            )));
        }
        player.progress = 1.0;
        player.timestamps = Some(timestamps);

        tracing::info!("Player {} finished race {}", player_id, id);
        Ok(race.summary())
    }

    /// Fastest words for every finished player, in arrival order.
    pub async fn fastest_words(&self, id: Uuid) -> Result<FastestWordsResponse> {
        let races = self.races.read().await;
        races.get(&id).ok_or_else(|| not_found(id))?.fastest_words()
    }
}

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("race {}", id))
}

//! Test fixtures and factory functions for request bodies.

use serde_json::json;

/// Prompt used by most race tests.
pub const PROMPT: &str = "Just have fun";

/// Timestamps for a player finishing PROMPT with per-word durations `durations`.
pub fn timestamps(start: f64, durations: &[f64]) -> Vec<f64> {
    let mut stamps = vec![start];
    for duration in durations {
        let last = *stamps.last().unwrap();
        stamps.push(last + duration);
    }
    stamps
}

/// Create a score request body.
pub fn score_request(typed: &str, reference: &str, elapsed_seconds: f64) -> serde_json::Value {
    json!({
        "typed": typed,
        "reference": reference,
        "elapsed_seconds": elapsed_seconds,
    })
}

/// Create an autocorrect request body.
pub fn autocorrect_request(
    word: &str,
    word_list: &[&str],
    algorithm: Option<&str>,
    limit: Option<usize>,
) -> serde_json::Value {
    let mut body = json!({ "word": word, "word_list": word_list });
    if let Some(algorithm) = algorithm {
        body["algorithm"] = json!(algorithm);
    }
    if let Some(limit) = limit {
        body["limit"] = json!(limit);
    }
    body
}

/// Create a race request body.
pub fn create_race_request(prompt: &str) -> serde_json::Value {
    json!({ "prompt": prompt })
}

/// Create a progress report body.
pub fn progress_request(player_id: u64, typed: &str) -> serde_json::Value {
    json!({ "player_id": player_id, "typed": typed })
}

/// Create a finish request body.
pub fn finish_request(player_id: u64, timestamps: &[f64]) -> serde_json::Value {
    json!({ "player_id": player_id, "timestamps": timestamps })
}

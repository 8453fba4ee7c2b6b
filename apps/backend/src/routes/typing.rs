//! Scoring and autocorrect endpoints

use axum::{extract::State, Json};
use typing_core::autocorrect_with;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/score
pub async fn score(Json(request): Json<ScoreRequest>) -> Result<Json<TypingScore>> {
    let score = typing_core::score(&request.typed, &request.reference, request.elapsed_seconds)?;
    Ok(Json(score))
}

/// POST /api/autocorrect
pub async fn autocorrect(
    State(state): State<AppState>,
    Json(request): Json<AutocorrectRequest>,
) -> Result<Json<AutocorrectResponse>> {
    // Request overrides win over the server defaults
    let settings = state
        .config
        .autocorrect
        .merge(request.algorithm, request.limit);

    let corrected = autocorrect_with(&request.word, request.word_list.as_slice(), &settings)?;

    Ok(Json(AutocorrectResponse {
        word: request.word,
        corrected,
        algorithm: settings.algorithm,
        limit: settings.limit,
    }))
}

//! Multiplayer race endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/races
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateRaceRequest>,
) -> Result<(StatusCode, Json<RaceSummary>)> {
    let race = state.races.create(&request.prompt).await?;
    Ok((StatusCode::CREATED, Json(race)))
}

/// GET /api/races/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RaceSummary>> {
    Ok(Json(state.races.get(id).await?))
}

/// POST /api/races/:id/progress
pub async fn progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ProgressRequest>,
) -> Result<Json<ProgressRecord>> {
    let record = state
        .races
        .report_progress(id, request.player_id, &request.typed)
        .await?;
    Ok(Json(record))
}

/// POST /api/races/:id/finish
pub async fn finish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FinishRequest>,
) -> Result<Json<RaceSummary>> {
    let race = state
        .races
        .finish(id, request.player_id, request.timestamps)
        .await?;
    Ok(Json(race))
}

/// GET /api/races/:id/fastest
pub async fn fastest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FastestWordsResponse>> {
    Ok(Json(state.races.fastest_words(id).await?))
}

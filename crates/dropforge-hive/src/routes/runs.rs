use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::state::AppState;
use axum::{extract::State, Json};
use dropforge_core::models::{Character, Run};
use dropforge_core::protocol::RunRequest;
use dropforge_core::stats::{drop_stats, MapDropStats};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct RunResponse {
    pub ok: bool,
    pub run: Run,
}

#[derive(Serialize)]
pub struct RunsResponse {
    pub ok: bool,
    pub runs: Vec<Run>,
}

#[derive(Serialize)]
pub struct CharactersResponse {
    pub ok: bool,
    pub characters: Vec<Character>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub ok: bool,
    pub total_runs: usize,
    pub maps: Vec<MapDropStats>,
}

pub async fn record(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<RunRequest>,
) -> AppResult<Json<RunResponse>> {
    let run = state.runs.record_run(payload)?;
    Ok(Json(RunResponse { ok: true, run }))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<RunsResponse>> {
    let runs = state.runs.list_runs()?;
    Ok(Json(RunsResponse { ok: true, runs }))
}

pub async fn characters(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<CharactersResponse>> {
    let characters = state.runs.list_characters()?;
    Ok(Json(CharactersResponse {
        ok: true,
        characters,
    }))
}

pub async fn stats(State(state): State<Arc<AppState>>) -> AppResult<Json<StatsResponse>> {
    let maps = state.catalog.list_maps()?;
    let runs = state.runs.list_runs()?;

    Ok(Json(StatsResponse {
        ok: true,
        total_runs: runs.len(),
        maps: drop_stats(&maps, &runs),
    }))
}

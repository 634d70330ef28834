use super::OkResponse;
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;
use axum::{
    extract::State,
    Extension, Json,
};
use dropforge_core::cohort::Cohort;
use dropforge_core::models::AttackRankEntry;
use dropforge_core::protocol::{EntryPatchRequest, NewEntryRequest};
use dropforge_core::ranking::{RankQuery, RankedEntry};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub ok: bool,
    pub cohort: Cohort,
    pub cap_pct: f64,
    pub entries: Vec<RankedEntry>,
}

#[derive(Serialize)]
pub struct EntryResponse {
    pub ok: bool,
    pub entry: AttackRankEntry,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Extension(cohort): Extension<Cohort>,
    ApiQuery(query): ApiQuery<RankQuery>,
) -> AppResult<Json<LeaderboardResponse>> {
    let ranked = state.book.ranked(cohort, &state.weights)?;

    Ok(Json(LeaderboardResponse {
        ok: true,
        cohort,
        cap_pct: cohort.crit_cap_pct(),
        entries: query.apply(ranked),
    }))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Extension(cohort): Extension<Cohort>,
    ApiJson(payload): ApiJson<NewEntryRequest>,
) -> AppResult<Json<EntryResponse>> {
    let entry = state.book.create(cohort, payload)?;
    Ok(Json(EntryResponse { ok: true, entry }))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Extension(cohort): Extension<Cohort>,
    ApiPath(id): ApiPath<String>,
    ApiJson(patch): ApiJson<EntryPatchRequest>,
) -> AppResult<Json<EntryResponse>> {
    let entry = state.book.update(cohort, &id, patch)?;
    Ok(Json(EntryResponse { ok: true, entry }))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Extension(cohort): Extension<Cohort>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Json<OkResponse>> {
    state.book.delete(cohort, &id)?;
    Ok(Json(OkResponse::new()))
}

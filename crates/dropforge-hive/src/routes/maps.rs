use super::OkResponse;
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;
use axum::{extract::State, Json};
use dropforge_core::models::{GameMap, MapItem};
use dropforge_core::protocol::{
    CreateItemRequest, CreateMapRequest, UpdateItemRequest, UpdateMapRequest,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize)]
pub struct MapsResponse {
    pub ok: bool,
    pub maps: Vec<GameMap>,
}

#[derive(Serialize)]
pub struct MapResponse {
    pub ok: bool,
    pub map: GameMap,
}

#[derive(Serialize)]
pub struct ItemResponse {
    pub ok: bool,
    pub item: MapItem,
}

#[derive(Deserialize)]
pub struct MapIdParams {
    pub id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRefParams {
    pub map_id: Option<String>,
    pub item_id: Option<String>,
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<MapsResponse>> {
    let maps = state.catalog.list_maps()?;
    Ok(Json(MapsResponse { ok: true, maps }))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateMapRequest>,
) -> AppResult<Json<MapResponse>> {
    let map = state.catalog.create_map(payload)?;
    Ok(Json(MapResponse { ok: true, map }))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<UpdateMapRequest>,
) -> AppResult<Json<MapResponse>> {
    let map = state.catalog.update_map(payload)?;
    Ok(Json(MapResponse { ok: true, map }))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<MapIdParams>,
) -> AppResult<Json<OkResponse>> {
    state
        .catalog
        .delete_map(params.id.as_deref().unwrap_or_default())?;
    Ok(Json(OkResponse::new()))
}

pub async fn add_item(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateItemRequest>,
) -> AppResult<Json<ItemResponse>> {
    let item = state.catalog.add_item(payload)?;
    Ok(Json(ItemResponse { ok: true, item }))
}

pub async fn update_item(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<UpdateItemRequest>,
) -> AppResult<Json<ItemResponse>> {
    let item = state.catalog.update_item(payload)?;
    Ok(Json(ItemResponse { ok: true, item }))
}

pub async fn remove_item(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<ItemRefParams>,
) -> AppResult<Json<OkResponse>> {
    state.catalog.delete_item(
        params.map_id.as_deref().unwrap_or_default(),
        params.item_id.as_deref().unwrap_or_default(),
    )?;
    Ok(Json(OkResponse::new()))
}

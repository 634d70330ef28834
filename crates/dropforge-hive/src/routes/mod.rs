pub mod maps;
pub mod rank;
pub mod runs;
pub mod score;
pub mod system;

use crate::state::AppState;
use axum::routing::{get, patch, post};
use axum::{Extension, Router};
use dropforge_core::cohort::Cohort;
use serde::Serialize;
use std::sync::Arc;

/// Body of endpoints that only acknowledge.
#[derive(Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
}

pub fn catalog_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/maps",
            get(maps::list)
                .post(maps::create)
                .put(maps::update)
                .delete(maps::remove),
        )
        .route(
            "/api/maps/items",
            post(maps::add_item)
                .put(maps::update_item)
                .delete(maps::remove_item),
        )
}

pub fn run_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/run", post(runs::record))
        .route("/api/runs", get(runs::list))
        .route("/api/characters", get(runs::characters))
        .route("/api/stats", get(runs::stats))
}

pub fn score_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/score", post(score::score))
}

/// Leaderboard routes for one cohort, mounted under its route prefix.
pub fn rank_routes(cohort: Cohort) -> Router<Arc<AppState>> {
    let prefix = cohort.route();
    Router::new()
        .route(prefix, get(rank::list).post(rank::create))
        .route(
            &format!("{}/{{id}}", prefix),
            patch(rank::update).delete(rank::remove),
        )
        .layer(Extension(cohort))
}

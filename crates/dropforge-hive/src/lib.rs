//! DropForge Hive: the JSON API over the map catalog, run log and attack
//! rank tables.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use crate::state::AppState;
use axum::Router;
use dropforge_core::cohort::Cohort;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// The full application router, with CORS and request tracing applied.
pub fn app(state: Arc<AppState>) -> Router {
    let rank = Cohort::iter().fold(Router::new(), |router, cohort| {
        router.merge(routes::rank_routes(cohort))
    });

    routes::system_routes()
        .merge(routes::catalog_routes())
        .merge(routes::run_routes())
        .merge(routes::score_routes())
        .merge(rank)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

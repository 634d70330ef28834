use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::state::AppState;
use axum::{extract::State, Json};
use dropforge_core::cohort::Cohort;
use dropforge_core::config::ScoreWeights;
use dropforge_core::protocol::ScoreRequest;
use dropforge_core::scorer::{ScoreBreakdown, Scorer};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohort: Option<Cohort>,
    pub weights: ScoreWeights,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Scores an ad-hoc stat block without storing it.
///
/// Weights default to the server's; a cohort, when named, overrides the cap.
pub async fn score(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<ScoreRequest>,
) -> AppResult<Json<ScoreResponse>> {
    let base = payload.weights.unwrap_or(state.weights);
    if !base.is_finite() {
        return Err(AppError::Validation("weights must be finite numbers".into()));
    }

    let cohort = match payload.cohort.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<Cohort>()
                .map_err(|_| AppError::Validation(format!("unknown cohort '{}'", raw)))?,
        ),
    };
    let weights = cohort.map_or(base, |c| c.weights(&base));

    let result = Scorer::new(weights).score(&payload.stats);

    Ok(Json(ScoreResponse {
        ok: true,
        cohort,
        weights,
        score: result.score,
        breakdown: result.breakdown,
    }))
}

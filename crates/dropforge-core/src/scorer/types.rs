use serde::{Deserialize, Serialize};

/// Intermediate values of a score, kept for display and audit only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub effective_attack: f64,
    pub back_multiplier: f64,
    pub crit_expected_multiplier: f64,
    pub crit_chance_capped_pct: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

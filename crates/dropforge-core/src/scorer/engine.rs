use super::types::{ScoreBreakdown, ScoreResult};
use crate::coerce::finite_or_zero;
use crate::config::ScoreWeights;
use crate::models::StatBlock;

/// `min(max, max(min, n))`, evaluated literally.
///
/// Unlike `f64::clamp` this never panics when `min > max`; a negative cap
/// simply wins.
#[inline(always)]
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    max.min(min.max(n))
}

/// Expected damage per hit, reduced to a single comparable number.
///
/// `score = effective_attack * back_multiplier * crit_expected_multiplier`
///
/// * `effective_attack = attack + special_attack * special_attack_to_attack`
/// * `back_multiplier = 1 + back% / 100 * back_attack_weight`
/// * `crit_expected_multiplier = 1 + capped_crit% / 100 * crit_damage% / 100 * crit_weight`
///
/// `crit_damage_pct` is the extra damage a crit deals: 200% crit damage at
/// 100% crit chance gives a 3x multiplier. Crit chance beyond
/// `crit_chance_cap_pct` is wasted.
pub fn compute(stats: &StatBlock, weights: &ScoreWeights) -> ScoreResult {
    let StatBlock {
        attack,
        crit_chance_pct,
        crit_damage_pct,
        special_attack,
        back_attack_damage_pct,
    } = stats.normalized();

    let effective_attack = attack + special_attack * weights.special_attack_to_attack;

    let back_multiplier = 1.0 + (back_attack_damage_pct / 100.0) * weights.back_attack_weight;

    let crit_chance_capped_pct = clamp(crit_chance_pct, 0.0, weights.crit_chance_cap_pct);
    let crit_chance = crit_chance_capped_pct / 100.0;

    let crit_expected_multiplier =
        1.0 + crit_chance * (crit_damage_pct / 100.0) * weights.crit_weight;

    let score = effective_attack * back_multiplier * crit_expected_multiplier;

    // Non-finite values here only come from overflow on absurd inputs.
    ScoreResult {
        score: finite_or_zero(score),
        breakdown: ScoreBreakdown {
            effective_attack: finite_or_zero(effective_attack),
            back_multiplier: finite_or_zero(back_multiplier),
            crit_expected_multiplier: finite_or_zero(crit_expected_multiplier),
            crit_chance_capped_pct: finite_or_zero(crit_chance_capped_pct),
        },
    }
}

use crate::reports;
use clap::Args;
use dropforge_core::cohort::Cohort;
use dropforge_core::config::{Config, ScoreWeights};
use dropforge_core::error::ForgeResult;
use dropforge_core::models::StatBlock;
use dropforge_core::scorer::{ScoreResult, Scorer};
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub attack: f64,

    /// Crit chance in percent, e.g. 117.52
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub crit_chance: f64,

    /// Crit damage in percent, e.g. 968.02
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub crit_damage: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub special_attack: f64,

    /// Back attack damage in percent, e.g. 86.9
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub back_attack: f64,

    /// Apply a cohort's crit cap (120 or 100)
    #[arg(long)]
    pub cohort: Option<Cohort>,

    /// Print JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreOutput {
    stats: StatBlock,
    weights: ScoreWeights,
    #[serde(flatten)]
    result: ScoreResult,
}

pub fn run(args: ScoreArgs, weights: ScoreWeights) -> ForgeResult<()> {
    let weights = args.cohort.map_or(weights, |c| c.weights(&weights));
    let stats = StatBlock {
        attack: args.attack,
        crit_chance_pct: args.crit_chance,
        crit_damage_pct: args.crit_damage,
        special_attack: args.special_attack,
        back_attack_damage_pct: args.back_attack,
    };

    let result = Scorer::new(weights).score(&stats);

    if args.json {
        let out = ScoreOutput {
            stats,
            weights,
            result,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        reports::print_score_report(&stats, &weights, &result);
    }
    Ok(())
}

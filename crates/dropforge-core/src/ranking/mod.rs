pub mod book;
pub mod query;

pub use self::book::RankBook;
pub use self::query::{RankQuery, SortDir, SortKey};

use crate::config::ScoreWeights;
use crate::models::AttackRankEntry;
use crate::scorer::{ScoreBreakdown, Scorer};
use serde::Serialize;

/// A stored entry annotated with its freshly computed score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    #[serde(flatten)]
    pub entry: AttackRankEntry,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Scores every entry and orders them by descending score.
///
/// Ties keep their stored order.
pub fn rank_entries(entries: Vec<AttackRankEntry>, weights: &ScoreWeights) -> Vec<RankedEntry> {
    let scorer = Scorer::new(*weights);

    let mut ranked: Vec<RankedEntry> = entries
        .into_iter()
        .map(|entry| {
            let result = scorer.score(&entry.stats);
            RankedEntry {
                entry,
                score: result.score,
                breakdown: result.breakdown,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

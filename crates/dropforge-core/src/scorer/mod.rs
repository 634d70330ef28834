pub mod engine;
pub mod types;

pub use self::types::{ScoreBreakdown, ScoreResult};
use crate::config::ScoreWeights;
use crate::models::StatBlock;

/// Scores stat blocks against one fixed set of weights.
///
/// Holds no state besides the weights, so a single instance can be shared
/// across threads and reused for a whole cohort.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scorer {
    pub weights: ScoreWeights,
}

impl Scorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, stats: &StatBlock) -> ScoreResult {
        engine::compute(stats, &self.weights)
    }
}

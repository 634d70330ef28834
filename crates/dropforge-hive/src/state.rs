use dropforge_core::catalog::Catalog;
use dropforge_core::config::ScoreWeights;
use dropforge_core::ranking::RankBook;
use dropforge_core::runs::RunLog;
use dropforge_core::store::JsonStore;

#[derive(Clone)]
pub struct AppState {
    pub book: RankBook,
    pub catalog: Catalog,
    pub runs: RunLog,
    /// Base weights; each cohort overrides the crit cap.
    pub weights: ScoreWeights,
}

impl AppState {
    pub fn new(store: JsonStore, weights: ScoreWeights) -> Self {
        Self {
            book: RankBook::new(store.clone()),
            catalog: Catalog::new(store.clone()),
            runs: RunLog::new(store),
            weights,
        }
    }
}

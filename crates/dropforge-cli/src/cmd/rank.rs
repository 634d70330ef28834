use crate::reports;
use clap::Args;
use dropforge_core::cohort::Cohort;
use dropforge_core::config::{Config, ScoreWeights};
use dropforge_core::error::ForgeResult;
use dropforge_core::ranking::{RankBook, RankQuery, SortDir, SortKey};
use dropforge_core::store::JsonStore;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long, default_value = "120")]
    pub cohort: Cohort,

    /// Keep entries whose name contains this text
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub character: Option<String>,

    #[arg(long)]
    pub atk_min: Option<String>,

    #[arg(long)]
    pub crit_min: Option<String>,

    #[arg(long)]
    pub score_min: Option<String>,

    /// name, character, attack, critChancePct, critDamagePct, specialAttack,
    /// backAttackDamagePct or score
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Ascending order (default is descending)
    #[arg(long, default_value_t = false)]
    pub asc: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl RankArgs {
    fn query(&self) -> RankQuery {
        RankQuery {
            name: self.name.clone(),
            character: self.character.clone(),
            atk_min: self.atk_min.clone(),
            crit_min: self.crit_min.clone(),
            score_min: self.score_min.clone(),
            sort: self.sort,
            dir: Some(if self.asc { SortDir::Asc } else { SortDir::Desc }),
        }
    }
}

pub fn run(args: RankArgs, weights: ScoreWeights) -> ForgeResult<()> {
    let book = RankBook::new(JsonStore::new(&args.config.store.data_dir));
    let cohort = args.cohort;

    let ranked = book.ranked(cohort, &weights)?;
    let total = ranked.len();
    let entries = args.query().apply(ranked);
    info!("🏁 [{}] {} of {} entries", cohort, entries.len(), total);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        reports::print_leaderboard(cohort, &entries);
    }
    Ok(())
}

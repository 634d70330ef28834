use crate::reports;
use clap::Args;
use dropforge_core::catalog::Catalog;
use dropforge_core::config::Config;
use dropforge_core::error::{ForgeError, ForgeResult};
use dropforge_core::runs::RunLog;
use dropforge_core::stats::drop_stats;
use dropforge_core::store::JsonStore;

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub config: Config,

    /// Only this map id
    #[arg(long)]
    pub map: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: StatsArgs) -> ForgeResult<()> {
    let store = JsonStore::new(&args.config.store.data_dir);
    let mut maps = Catalog::new(store.clone()).list_maps()?;
    let runs = RunLog::new(store).list_runs()?;

    if let Some(id) = &args.map {
        maps.retain(|m| &m.id == id);
        if maps.is_empty() {
            return Err(ForgeError::not_found(format!("map '{}' not found", id)));
        }
    }

    let stats = drop_stats(&maps, &runs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        for map in &stats {
            reports::print_drop_table(map);
        }
    }
    Ok(())
}

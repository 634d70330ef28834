use anyhow::{anyhow, Context};
use clap::{CommandFactory, FromArgMatches, Parser};
use dropforge_core::config::Config;
use dropforge_core::store::JsonStore;
use dropforge_hive::state::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "dropforge-hive", about = "JSON API for drop tracking and attack ranks")]
struct Args {
    #[command(flatten)]
    config: Config,

    /// JSON file with score weights; weight flags override its values
    #[arg(long = "weights")]
    weights_file: Option<PathBuf>,

    #[arg(long, short, default_value_t = 3000)]
    port: u16,

    #[arg(long, short, default_value = "0.0.0.0")]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches)?;

    info!("🐝 DropForge Hive is initializing...");

    let weights = args
        .config
        .resolve_weights(args.weights_file.as_deref(), &matches)
        .map_err(|e| anyhow!(e))?;
    if args.weights_file.is_none() {
        warn!("⚠️  No weights file given. Using defaults and flags.");
    }

    let data_dir = args.config.store.data_dir;
    info!("📂 Data directory: {:?}", data_dir);

    let state = Arc::new(AppState::new(JsonStore::new(data_dir), weights));
    let app = dropforge_hive::app(state);

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    info!("🚀 Hive listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use dropforge_core::config::{Config, ScoreWeights};
use dropforge_core::error::{ForgeError, ForgeResult};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(name = "dropforge", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with score weights; weight flags override its values
    #[arg(global = true, long = "weights")]
    weights_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one stat line
    Score(cmd::score::ScoreArgs),
    /// Print an attack rank leaderboard
    Rank(cmd::rank::RankArgs),
    /// Print drop rates per map
    Stats(cmd::stats::StatsArgs),
}

impl Commands {
    fn config(&self) -> &Config {
        match self {
            Commands::Score(args) => &args.config,
            Commands::Rank(args) => &args.config,
            Commands::Stats(args) => &args.config,
        }
    }
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let weights = resolve_weights(&cli, &matches).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args, weights),
        Commands::Rank(args) => cmd::rank::run(args, weights),
        Commands::Stats(args) => cmd::stats::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn resolve_weights(cli: &Cli, matches: &ArgMatches) -> ForgeResult<ScoreWeights> {
    let Some((_, sub_matches)) = matches.subcommand() else {
        return Ok(cli.command.config().weights);
    };

    if let Some(path) = &cli.weights_file {
        info!("⚖️  Loading Weights from: {:?}", path);
    }
    cli.command
        .config()
        .resolve_weights(cli.weights_file.as_deref(), sub_matches)
        .map_err(ForgeError::Config)
}

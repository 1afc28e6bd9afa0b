use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use d2lootfilter::{remove_all_rules, Filter, FilterWriter, GameCatalog};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Keyword accepted in place of a filter path to only undo earlier runs.
const REMOVE: &str = "remove";

/// Apply a loot filter to a game data directory
#[derive(Parser, Debug)]
#[command(name = "d2lootfilter", version)]
struct Cli {
    /// Filter file to apply, or `remove` to restore the original data files
    filter: String,

    /// Game data directory (the one containing `local/`, `global/` and `hd/`)
    data_dir: PathBuf,

    /// Parse, evaluate and validate the filter without touching any file
    #[arg(long)]
    check: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.check {
        let restored = remove_all_rules(&cli.data_dir).context("failed to remove previous rules")?;
        info!("restored {} files", restored.len());
    }
    if cli.filter == REMOVE {
        return Ok(());
    }

    let catalog = GameCatalog::load(&cli.data_dir)?;
    let filter = Filter::from_file(&cli.filter, &catalog)
        .with_context(|| format!("invalid filter {}", cli.filter))?;

    if cli.check {
        for rule in filter.rules() {
            info!("{rule}");
        }
        return Ok(());
    }

    let mut writer = FilterWriter::new(&cli.data_dir, &catalog);
    writer.write_all(filter.rules())?;
    let written = writer.finish()?;
    info!("applied {filter}, {} files written", written.len());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs one bridge crossing play-through.

mod config;
mod game_loop;
mod input;
mod terminal;

use std::{
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Result;
use bridge_crossing_core::Outcome;
use bridge_crossing_rendering::{Frame, Prompt, RenderingBackend};
use bridge_crossing_system_bootstrap::Bootstrap;
use bridge_crossing_system_builder::RandomTileGenerator;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    config::GameConfig,
    input::{acquire, parse_bridge_size},
    terminal::TerminalBackend,
};

/// Cross a hidden bridge one tile at a time.
#[derive(Debug, Parser)]
#[command(name = "bridge-crossing", version)]
struct Cli {
    /// TOML file with game settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for a reproducible bridge; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,
    /// Bridge length; prompted for when omitted.
    #[arg(long)]
    size: Option<String>,
    /// Log filter applied when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Entry point for the bridge crossing command-line interface.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut input = io::stdin().lock();
    let mut backend = TerminalBackend::new(io::stdout().lock());
    match run(&cli, &mut input, &mut backend) {
        Ok(_) => ExitCode::SUCCESS,
        Err(failure) => {
            error!(error = ?failure, "play-through aborted");
            let _ = backend.present(&Frame::Error(&format!("{failure:#}")));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run<R, B>(cli: &Cli, input: &mut R, backend: &mut B) -> Result<Outcome>
where
    R: BufRead + ?Sized,
    B: RenderingBackend + ?Sized,
{
    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let bootstrap = Bootstrap::default();
    backend.present(&Frame::Banner(bootstrap.welcome_banner()))?;

    let bounds = config.size_bounds();
    let size = match cli.size.as_deref() {
        Some(raw) => parse_bridge_size(raw, &bounds)?,
        None => acquire(
            input,
            backend,
            Prompt::BridgeSize {
                min: *bounds.start(),
                max: *bounds.end(),
            },
            |raw| parse_bridge_size(raw, &bounds),
        )?,
    };

    let mut session = match cli.seed.or(config.seed) {
        Some(seed) => {
            info!(seed, "using seeded bridge");
            bootstrap.start(size, &mut RandomTileGenerator::seeded(seed))?
        }
        None => bootstrap.start(size, &mut RandomTileGenerator::from_entropy())?,
    };

    game_loop::play(&mut session, input, backend, config.layout())
}

//! Headless match-3 runner (default binary).
//!
//! Plays seeded random swaps on a fresh board and streams board events to
//! stdout as JSON lines. Logs go to stderr; set `RUST_LOG=debug` to see every
//! committed and rejected move.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use match3::autoplay;
use match3::config::RunConfig;

/// Match-3 engine autoplay
#[derive(Parser, Debug)]
#[command(name = "match3")]
#[command(about = "Play seeded random moves on a match-3 board", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML run config (defaults are used if the file does not exist)
    #[arg(short, long, default_value = "match3.toml")]
    config: PathBuf,

    /// Board width, overrides the config file
    #[arg(long)]
    width: Option<usize>,

    /// Board height, overrides the config file
    #[arg(long)]
    height: Option<usize>,

    /// RNG seed, overrides the config file
    #[arg(long)]
    seed: Option<u32>,

    /// Number of tile colours, overrides the config file
    #[arg(long)]
    colors: Option<u8>,

    /// Number of moves to attempt, overrides the config file
    #[arg(short, long)]
    moves: Option<u32>,

    /// Play without keeping score
    #[arg(long)]
    no_score: bool,
}

impl Cli {
    fn apply(&self, config: &mut RunConfig) {
        if let Some(width) = self.width {
            config.board.width = width;
        }
        if let Some(height) = self.height {
            config.board.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(colors) = self.colors {
            config.colors = colors;
        }
        if let Some(moves) = self.moves {
            config.moves = moves;
        }
        if self.no_score {
            config.board = config.board.without_score();
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = RunConfig::load_or_default(&cli.config)?;
    cli.apply(&mut config);
    config.validate()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = autoplay::run(&config, &mut out)?;

    info!(
        attempted = summary.attempted,
        committed = summary.committed,
        rejected = summary.rejected,
        tiles_cleared = summary.tiles_cleared,
        score = summary.score,
        "autoplay complete"
    );
    Ok(())
}

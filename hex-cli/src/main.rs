//! Hex - command-line entry point
//!
//! Usage:
//! - `hex <SIZE> <FIRST> <SECOND> [auto-print]`
//! - `hex --config game.json`
//!
//! Naming the second player `BogoAI` or `HeroAI` hands that seat to an AI.
//! Logs go to stderr and are filtered through `RUST_LOG` (default `warn`).

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hex_cli::Shell;
use hex_core::{GameConfig, GameManager, HexError};

/// Literal that enables printing the board after every move
const AUTO_PRINT_FLAG: &str = "auto-print";

#[derive(Parser)]
#[command(name = "hex")]
#[command(about = "Play Hex in the terminal, against a friend or an AI")]
struct Cli {
    /// Odd board edge length
    #[arg(required_unless_present = "config")]
    size: Option<usize>,

    /// Name of the player moving first
    #[arg(required_unless_present = "config")]
    first_player: Option<String>,

    /// Name of the second player (BogoAI or HeroAI for an AI)
    #[arg(required_unless_present = "config")]
    second_player: Option<String>,

    /// Pass `auto-print` to print the board after every move
    auto_print: Option<String>,

    /// Read the game configuration from a JSON file instead
    #[arg(long, conflicts_with_all = ["size", "first_player", "second_player", "auto_print"])]
    config: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<GameConfig> {
        if let Some(path) = self.config {
            return GameConfig::load(&path)
                .with_context(|| format!("loading config from {}", path.display()));
        }

        let (Some(size), Some(first), Some(second)) =
            (self.size, self.first_player, self.second_player)
        else {
            bail!("expected <SIZE> <FIRST> <SECOND> or --config <FILE>");
        };
        let auto_print = match self.auto_print.as_deref() {
            None => false,
            Some(AUTO_PRINT_FLAG) => true,
            Some(other) => {
                tracing::warn!(option = other, "unknown trailing argument");
                return Err(HexError::InvalidArguments.into());
            }
        };

        let config = GameConfig::new(size, first, second).with_auto_print(auto_print);
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Cli::parse().into_config()?;
    tracing::info!(size = config.size, auto_print = config.auto_print, "starting");

    let manager = GameManager::new(config)?;
    let mut shell = Shell::new(manager, io::stdin().lock(), io::stdout().lock(), io::stderr());
    shell.run()
}

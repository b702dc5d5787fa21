//! Command-line interface for the solitaire binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::GameConfig;
use crate::error::ConfigError;

/// Marble Solitaire - peg solitaire on a cross-shaped board
#[derive(Parser, Debug)]
#[command(name = "solitaire")]
#[command(about = "Single-player marble solitaire", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "solitaire.toml")]
    pub config: PathBuf,

    /// Board side length
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Require the last marble to finish on the center cell
    #[arg(long)]
    pub center_win: bool,

    /// Number of undos allowed per game
    #[arg(short, long)]
    pub undos: Option<u32>,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = GameConfig::load_or_default(&self.config)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut GameConfig) {
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if self.center_win {
            config.center_win = true;
        }
        if let Some(undos) = self.undos {
            config.undo_budget = undos;
        }
    }
}

use std::path::Path;

use tracing::warn;

use crate::board::DEFAULT_BOARD_SIZE;
use crate::error::ConfigError;

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 25;
pub const DEFAULT_UNDO_BUDGET: u32 = 3;

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid
    pub board_size: usize,
    /// Require the last marble to end on the center cell
    pub center_win: bool,
    /// Undos allowed per game
    pub undo_budget: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            center_win: false,
            undo_budget: DEFAULT_UNDO_BUDGET,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        Ok(())
    }
}

use std::path::PathBuf;

/// Errors that can occur when parsing the text form of a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("board text is empty")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("board has {size} rows, at most {max} are supported")]
    TooLarge { size: usize, max: usize },

    #[error("unknown cell character {ch:?} at ({row},{col})")]
    UnknownCell { ch: char, row: usize, col: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

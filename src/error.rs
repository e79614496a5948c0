use std::path::PathBuf;

/// Errors raised by the game core for caller contract violations.
///
/// A full column is not an error; it surfaces as `MoveResult::Ignored`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is outside the board (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("board dimensions {height}x{width} out of range (both must be positive, at most {max} cells)", max = crate::game::MAX_CELLS)]
    InvalidDimensions { height: usize, width: usize },

    #[error("the game is over; start a new game to keep playing")]
    GameOver,
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

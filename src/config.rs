use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{validate_dimensions, Player, DEFAULT_HEIGHT, DEFAULT_WIDTH, WIN_LENGTH};

/// Board dimensions for new games.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Display names shown by the front end.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one_name: String,
    pub two_name: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one_name: Player::One.name().to_string(),
            two_name: Player::Two.name().to_string(),
        }
    }
}

impl PlayersConfig {
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one_name,
            Player::Two => &self.two_name,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.board.height, self.board.width)
            .map_err(|e| ConfigError::Validation(format!("board: {e}")))?;
        if self.players.one_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.one_name must not be empty".into(),
            ));
        }
        if self.players.two_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.two_name must not be empty".into(),
            ));
        }

        // A line of four still fits when either dimension is at least four
        if self.board.height < WIN_LENGTH && self.board.width < WIN_LENGTH {
            warn!(
                "{}x{} board is too small for four in a row; every game will be a draw",
                self.board.height, self.board.width
            );
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}

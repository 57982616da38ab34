//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use lld_tictactoe::{Board, DEFAULT_SIZE, GameSetup, Mark, Player, SetupError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Identity and mark for one player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Unique player id.
    id: String,
    /// Display name.
    name: String,
    /// Mark the player places.
    mark: Mark,
}

impl PlayerConfig {
    /// Creates a player configuration.
    pub fn new(id: impl Into<String>, name: impl Into<String>, mark: Mark) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mark,
        }
    }

    /// Builds the player this configuration describes.
    pub fn to_player(&self) -> Player {
        Player::new(&self.id, &self.name, self.mark)
    }
}

/// Configuration for one game: board size and the two players.
///
/// When `player_two` is left out of the file it takes the mark
/// `player_one` does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(from = "GameConfigFile")]
pub struct GameConfig {
    /// Board side length.
    board_size: usize,

    /// Player who moves first.
    player_one: PlayerConfig,

    /// Player who moves second.
    player_two: PlayerConfig,
}

/// On-disk form of [`GameConfig`], before the second player is resolved.
#[derive(Deserialize)]
struct GameConfigFile {
    #[serde(default = "default_board_size")]
    board_size: usize,

    #[serde(default = "default_player_one")]
    player_one: PlayerConfig,

    #[serde(default)]
    player_two: Option<PlayerConfig>,
}

impl From<GameConfigFile> for GameConfig {
    fn from(file: GameConfigFile) -> Self {
        let player_two = file
            .player_two
            .unwrap_or_else(|| default_player_two(file.player_one.mark.opponent()));
        Self {
            board_size: file.board_size,
            player_one: file.player_one,
            player_two,
        }
    }
}

fn default_board_size() -> usize {
    DEFAULT_SIZE
}

fn default_player_one() -> PlayerConfig {
    PlayerConfig::new("1", "Player One", Mark::X)
}

fn default_player_two(mark: Mark) -> PlayerConfig {
    PlayerConfig::new("2", "Player Two", mark)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            player_one: default_player_one(),
            player_two: default_player_two(Mark::O),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(
            board_size = config.board_size,
            player_one = %config.player_one.name,
            player_two = %config.player_two.name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces the board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Builds a validated game setup from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] for a zero board size or players that share
    /// a mark or an id.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn build(&self) -> Result<GameSetup, SetupError> {
        let board = Board::new(self.board_size)?;
        GameSetup::new(
            board,
            self.player_one.to_player(),
            self.player_two.to_player(),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

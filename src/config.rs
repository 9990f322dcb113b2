//! Engine configuration for the console front end.

use crate::games::tictactoe::Player;
use crate::search::{Algorithm, RandomStrategy, Strategy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which algorithm the computer plays and how deep it looks.
///
/// ```toml
/// algorithm = "alpha-beta"
/// depth = 4
/// human = "O"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct EngineConfig {
    /// Algorithm used for the computer's moves.
    #[serde(default)]
    algorithm: Algorithm,

    /// Search depth in plies; absent means search to the end of the game.
    #[serde(default)]
    depth: Option<u32>,

    /// Side the human plays against the computer.
    #[serde(default = "default_human")]
    human: Player,

    /// Seed for the random algorithm.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_human() -> Player {
    Player::X
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            depth: None,
            human: default_human(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(algorithm = %config.algorithm, depth = ?config.depth, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Builds the computer's strategy.
    pub fn strategy(&self) -> Box<dyn Strategy> {
        match (self.algorithm, self.seed) {
            (Algorithm::Random, Some(seed)) => Box::new(RandomStrategy::with_seed(seed)),
            (algorithm, _) => algorithm.strategy(self.depth),
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Arena configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_noughts::{Difficulty, Player};
use tracing::{debug, info, instrument};

/// Which strategy plays each mark, who opens, and how random choices are
/// seeded.
///
/// ```toml
/// x = "hard"
/// o = "medium"
/// first = "X"
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Difficulty playing the X mark.
    #[serde(default = "default_difficulty")]
    x: Difficulty,

    /// Difficulty playing the O mark.
    #[serde(default = "default_difficulty")]
    o: Difficulty,

    /// Player who moves first.
    #[serde(default = "default_first")]
    first: Player,

    /// Seed for random choices; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_difficulty() -> Difficulty {
    Difficulty::Medium
}

fn default_first() -> Player {
    Player::X
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            x: default_difficulty(),
            o: default_difficulty(),
            first: default_first(),
            seed: None,
        }
    }
}

impl ArenaConfig {
    /// Creates a configuration from explicit values.
    pub fn new(x: Difficulty, o: Difficulty, first: Player, seed: Option<u64>) -> Self {
        Self { x, o, first, seed }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(x = %config.x, o = %config.o, first = %config.first, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces any field for which an override is given.
    pub fn with_overrides(
        mut self,
        x: Option<Difficulty>,
        o: Option<Difficulty>,
        first: Option<Player>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(o) = o {
            self.o = o;
        }
        if let Some(first) = first {
            self.first = first;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Difficulty assigned to `player`.
    pub fn difficulty_for(&self, player: Player) -> Difficulty {
        match player {
            Player::X => self.x,
            Player::O => self.o,
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

//! Game configuration.
//!
//! The ruleset is fixed (4x4 board, power-of-two tiles). `GameConfig` only
//! carries the tunables a caller may reasonably set when starting a game.

use serde::{Deserialize, Serialize};

use super::board::{Tile, MAX_TILE, TARGET};
use super::error::ConfigError;

/// Probability that a spawned tile is a 4 instead of a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tile value that sets the won flag (default: 2048).
    pub target: Tile,

    /// Probability that a spawned tile is a 4 (default: 0.1).
    pub four_probability: f64,

    /// Random seed for the spawn RNG.
    /// Same seed and same moves produce the same game.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target: TARGET,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom target tile.
    #[must_use]
    pub fn with_target(mut self, target: Tile) -> Self {
        self.target = target;
        self
    }

    /// Create a new config with custom 4-tile probability.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Check that the values describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::FourProbability(self.four_probability));
        }
        if self.target < 4 || self.target > MAX_TILE || !self.target.is_power_of_two() {
            return Err(ConfigError::Target(self.target));
        }
        Ok(())
    }
}

//! Save and restore a running game.
//!
//! A snapshot captures the config, the RNG position and the full state, so a
//! restored game continues with exactly the spawns the saved game would have
//! produced.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng, GameRngState, GameState, SnapshotError};

use super::session::Game;

/// Serializable checkpoint of a `Game`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub rng: GameRngState,
    pub state: GameState,
}

impl GameSnapshot {
    /// Capture the current game.
    #[must_use]
    pub fn capture(game: &Game) -> Self {
        Self {
            config: game.config().clone(),
            rng: game.rng().state(),
            state: game.state().clone(),
        }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode with bincode. The result is not yet validated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Validate and turn back into a playable game.
    ///
    /// Score, won and game-over are recomputed from the board.
    pub fn restore(self) -> Result<Game, SnapshotError> {
        self.config.validate()?;
        self.state.board().validate()?;
        let state = self.state.normalized(self.config.target);
        Ok(Game::from_parts(self.config, GameRng::from_state(&self.rng), state))
    }
}

impl Game {
    /// Shortcut for `GameSnapshot::capture`.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}

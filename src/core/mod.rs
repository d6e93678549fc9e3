//! Core types: board, directions, RNG, configuration, errors.
//!
//! These are the values the engine and the game driver pass around.
//! None of them knows about move rules.

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;
pub mod state;

pub use board::{Board, Cell, Score, Tile, MAX_TILE, SIZE, TARGET};
pub use config::GameConfig;
pub use direction::Direction;
pub use error::{BoardError, ConfigError, ParseDirectionError, SnapshotError};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedSource};
pub use state::{GameState, GameStatus, MoveRecord};

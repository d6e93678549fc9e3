//! # twenty48
//!
//! The classic 2048 puzzle on a fixed 4x4 board.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: `Board` is `Copy`. Every engine operation returns a
//!    new board and leaves its input alone.
//!
//! 2. **One Line Algorithm**: all four directions reuse a single leftward
//!    slide/merge by transposing and mirroring the board around it.
//!
//! 3. **Injectable Randomness**: spawning draws from a `RandomSource`, so
//!    tests script exact spawns and real games use a seeded ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: Board, directions, RNG, configuration, caller state, errors
//! - `rules`: The pure board engine (move, spawn, score, terminal checks)
//! - `game`: A driver that owns state and applies the accept/no-op pipeline

pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, Cell, ConfigError, Direction, GameConfig, GameRng, GameRngState,
    GameState, GameStatus, MoveRecord, ParseDirectionError, RandomSource, Score,
    ScriptedSource, SnapshotError, Tile, MAX_TILE, SIZE, TARGET,
};

pub use crate::rules::{
    apply_move, boards_equal, contains_value, create_empty_board, is_terminal,
    spawn_random_tile, sum_board,
};

pub use crate::game::{outcome_message, share_text, Game, GameSnapshot, MoveOutcome};

//! Error types.
//!
//! The engine operations themselves are total over well-formed boards.
//! Errors only arise at the edges: building a board from untrusted rows,
//! parsing input, validating configuration and restoring snapshots.

use super::board::Tile;

/// A grid that cannot be turned into a `Board`.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected 4 rows, got {0}")]
    WrongRowCount(usize),
    #[error("row {row} has {len} cells, expected 4")]
    WrongRowLength { row: usize, len: usize },
    #[error("tile {value} at ({row}, {col}) is not a power of two >= 2")]
    NotPowerOfTwo { row: usize, col: usize, value: Tile },
    #[error("tile {value} at ({row}, {col}) is larger than 262144")]
    TileTooLarge { row: usize, col: usize, value: Tile },
}

/// An input string that does not name a direction.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown direction: {0:?}")]
pub struct ParseDirectionError(pub String);

/// Invalid `GameConfig` values.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ConfigError {
    #[error("four_probability must be within [0, 1], got {0}")]
    FourProbability(f64),
    #[error("target must be a power of two from 4 to 262144, got {0}")]
    Target(Tile),
}

/// Failure to save or restore a game snapshot.
#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("snapshot holds an invalid board: {0}")]
    Board(#[from] BoardError),
    #[error("snapshot holds an invalid config: {0}")]
    Config(#[from] ConfigError),
}

//! Caller-side game state.
//!
//! ## GameState
//!
//! Everything a front end renders:
//! - Current board
//! - Score (always the sum of the tiles on the board)
//! - Won flag (set once any tile reaches or passes the target, then sticky)
//! - Game-over flag (the post-spawn board has no legal move)
//! - History of accepted moves
//!
//! A `GameState` is never edited in place by the engine. Each accepted move
//! produces a whole new state via `after_move`; the history uses an `im`
//! persistent vector so that step stays O(1) in the history length.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::{Board, Score, Tile};
use super::direction::Direction;
use crate::rules::is_terminal;

/// Coarse game status.
///
/// `GameOver` takes precedence over `Won` because it decides whether input
/// is still accepted. A won game that is not over keeps `Won` and stays
/// playable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    GameOver,
}

/// One accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Direction the player chose.
    pub direction: Direction,
    /// Board before the move.
    pub before: Board,
    /// Board after sliding, merging and spawning.
    pub after: Board,
    /// Number of merges the slide performed.
    pub merges: usize,
}

/// Snapshot of a game as seen by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    score: Score,
    won: bool,
    game_over: bool,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// State for a freshly dealt board.
    #[must_use]
    pub fn start(board: Board, target: Tile) -> Self {
        Self {
            board,
            score: board.sum(),
            won: board.reaches(target),
            game_over: is_terminal(&board),
            history: Vector::new(),
        }
    }

    /// State after an accepted move whose post-spawn board is `record.after`.
    ///
    /// The won flag never clears.
    #[must_use]
    pub fn after_move(&self, record: MoveRecord, target: Tile) -> Self {
        let board = record.after;
        let mut history = self.history.clone();
        history.push_back(record);
        Self {
            board,
            score: board.sum(),
            won: self.won || board.reaches(target),
            game_over: is_terminal(&board),
            history,
        }
    }

    /// Recompute the derived fields from the board.
    ///
    /// Used after deserializing a state from an untrusted source.
    #[must_use]
    pub fn normalized(mut self, target: Tile) -> Self {
        self.score = self.board.sum();
        self.won = self.won || self.board.reaches(target);
        self.game_over = is_terminal(&self.board);
        self
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Sum of all tiles on the current board.
    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Whether the target tile has ever been reached.
    #[must_use]
    pub fn won(&self) -> bool {
        self.won
    }

    /// Whether no move can change the current board.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Coarse status, `GameOver` first.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of accepted moves.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn record(before: Board, after: Board) -> MoveRecord {
        MoveRecord {
            direction: Direction::Left,
            before,
            after,
            merges: 0,
        }
    }

    #[test]
    fn test_start() {
        let board = Board::EMPTY.with_tile(Cell::new(0, 0), 2).with_tile(Cell::new(1, 1), 4);
        let state = GameState::start(board, 2048);

        assert_eq!(state.board(), board);
        assert_eq!(state.score(), 6);
        assert!(!state.won());
        assert!(!state.game_over());
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_after_move_replaces_state() {
        let before = Board::EMPTY.with_tile(Cell::new(0, 3), 2);
        let after = Board::EMPTY.with_tile(Cell::new(0, 0), 2).with_tile(Cell::new(2, 2), 4);
        let state = GameState::start(before, 2048);

        let next = state.after_move(record(before, after), 2048);

        assert_eq!(next.board(), after);
        assert_eq!(next.score(), 6);
        assert_eq!(next.move_count(), 1);
        // Original untouched
        assert_eq!(state.board(), before);
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_won_is_monotonic() {
        let winning = Board::EMPTY.with_tile(Cell::new(0, 0), 16);
        let state = GameState::start(Board::EMPTY.with_tile(Cell::new(0, 1), 16), 16);
        assert!(state.won());
        assert_eq!(state.status(), GameStatus::Won);

        let merged = Board::EMPTY.with_tile(Cell::new(0, 0), 32);
        let next = state.after_move(record(winning, merged), 16);
        assert!(next.won());
    }

    #[test]
    fn test_tile_past_target_wins() {
        let board = Board::EMPTY.with_tile(Cell::new(0, 0), 4096);
        let state = GameState::start(board, 2048);
        assert!(state.won());
        assert_eq!(state.status(), GameStatus::Won);

        let below = Board::EMPTY.with_tile(Cell::new(0, 0), 1024);
        let next = GameState::start(below, 2048).after_move(record(below, board), 2048);
        assert!(next.won());
    }

    #[test]
    fn test_game_over_dominates_won() {
        let board = Board::new([
            [2048, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let state = GameState::start(board, 2048);
        assert!(state.won());
        assert!(state.game_over());
        assert_eq!(state.status(), GameStatus::GameOver);
    }

    #[test]
    fn test_normalized() {
        let board = Board::EMPTY.with_tile(Cell::new(3, 3), 8);
        let mut state = GameState::start(board, 2048);
        state.score = 999;
        let state = state.normalized(8);
        assert_eq!(state.score(), 8);
        assert!(state.won());

        // A restored board already past the target counts as won
        let state = GameState::start(Board::EMPTY.with_tile(Cell::new(1, 1), 4096), 8192);
        assert!(!state.won());
        assert!(state.normalized(2048).won());
    }

    #[test]
    fn test_serialization() {
        let before = Board::EMPTY.with_tile(Cell::new(0, 3), 2);
        let after = Board::EMPTY.with_tile(Cell::new(0, 0), 2).with_tile(Cell::new(1, 0), 2);
        let state = GameState::start(before, 2048).after_move(record(before, after), 2048);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}

//! Game driver.
//!
//! `Game` owns the RNG and the current `GameState` and runs the per-input
//! pipeline on top of the pure engine:
//!
//! 1. Ignore input once the game is over.
//! 2. Slide and merge; an unchanged board is a no-op and nothing else happens.
//! 3. Spawn a tile, recompute the score, set won, then check game over on the
//!    post-spawn board.
//!
//! Input is handled one direction at a time; `handle_move` takes `&mut self`,
//! so the borrow checker serializes callers.

use tracing::{debug, info, trace};

use crate::core::{
    Board, Cell, ConfigError, Direction, GameConfig, GameRng, GameState, GameStatus, MoveRecord,
    RandomSource,
};
use crate::rules::{apply_move_counted, boards_equal, initial_board_with, spawn_random_tile_with};

use super::share::share_text;

/// What `handle_move` did with an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game is over; input ignored.
    Rejected,
    /// The move left the board unchanged; no spawn, no state change.
    NoOp,
    /// The move changed the board and a tile was spawned.
    Accepted {
        /// Pairs merged by the slide.
        merges: usize,
        /// Cell that received the new tile.
        spawned: Option<Cell>,
    },
}

impl MoveOutcome {
    /// Whether the state advanced.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// A running game.
///
/// ## Example
///
/// ```
/// use twenty48::core::{Direction, GameConfig};
/// use twenty48::game::Game;
///
/// let mut game = Game::new(GameConfig::default().with_seed(7)).unwrap();
/// assert_eq!(game.state().board().count_tiles(), 2);
///
/// for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
///     game.handle_move(dir);
/// }
/// assert_eq!(game.state().score(), game.state().board().sum());
/// ```
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    config: GameConfig,
    rng: R,
    state: GameState,
}

impl Game<GameRng> {
    /// Start a game seeded from `config.seed`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_source(config, rng)
    }

    /// Rebuild a game from its parts without dealing a new board.
    pub(crate) fn from_parts(config: GameConfig, rng: GameRng, state: GameState) -> Self {
        Self { config, rng, state }
    }

    /// The RNG, for checkpointing.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

impl<R: RandomSource> Game<R> {
    /// Start a game drawing spawns from `rng`.
    pub fn with_source(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = initial_board_with(&mut rng, config.four_probability);
        let state = GameState::start(board, config.target);
        info!(seed = config.seed, target_tile = config.target, "new game");
        trace!(board = %board, "initial board");
        Ok(Self { config, rng, state })
    }

    /// Deal a fresh board, discarding the current state.
    ///
    /// Continues the same RNG stream.
    pub fn restart(&mut self) {
        let board = initial_board_with(&mut self.rng, self.config.four_probability);
        self.state = GameState::start(board, self.config.target);
        info!(target_tile = self.config.target, "game restarted");
    }

    /// Process one directional input.
    pub fn handle_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.state.game_over() {
            debug!(%direction, "move rejected: game over");
            return MoveOutcome::Rejected;
        }

        let before = self.state.board();
        let (moved, merges) = apply_move_counted(before, direction);
        if boards_equal(&moved, &before) {
            trace!(%direction, "no-op move");
            return MoveOutcome::NoOp;
        }

        let after = spawn_random_tile_with(moved, &mut self.rng, self.config.four_probability);
        let spawned = spawned_cell(&moved, &after);

        let was_won = self.state.won();
        let record = MoveRecord {
            direction,
            before,
            after,
            merges,
        };
        self.state = self.state.after_move(record, self.config.target);

        debug!(
            %direction,
            merges,
            score = self.state.score(),
            moves = self.state.move_count(),
            "move accepted"
        );
        if self.state.won() && !was_won {
            info!(score = self.state.score(), target_tile = self.config.target, "target reached");
        }
        if self.state.game_over() {
            info!(score = self.state.score(), won = self.state.won(), "game over");
        }

        MoveOutcome::Accepted { merges, spawned }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Configuration this game was started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shortcut for `state().status()`.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Share line for the current score.
    #[must_use]
    pub fn share_text(&self, title: &str, description: &str) -> String {
        share_text(title, description, self.state.score())
    }
}

/// The cell that is empty in `moved` but filled in `after`.
fn spawned_cell(moved: &Board, after: &Board) -> Option<Cell> {
    moved
        .iter_cells()
        .zip(after.iter_cells())
        .find(|((_, m), (_, a))| *m == 0 && *a != 0)
        .map(|((cell, _), _)| cell)
}

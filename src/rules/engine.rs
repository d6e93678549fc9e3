//! Board engine operations.
//!
//! Every function here is value-in/value-out: boards are taken by value or by
//! shared reference and a new board is returned. Nothing is retained between
//! calls and the only side effect is consuming draws from a `RandomSource`.

use crate::core::config::DEFAULT_FOUR_PROBABILITY;
use crate::core::{Board, Direction, RandomSource, Score, Tile, SIZE};

use super::slide::{orient, slide_line, unorient};

/// A board with every cell empty.
#[must_use]
pub fn create_empty_board() -> Board {
    Board::EMPTY
}

/// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
///
/// A full board is returned unchanged and no draws are consumed.
#[must_use]
pub fn spawn_random_tile<R: RandomSource + ?Sized>(board: Board, rng: &mut R) -> Board {
    spawn_random_tile_with(board, rng, DEFAULT_FOUR_PROBABILITY)
}

/// `spawn_random_tile` with a custom probability of spawning a 4.
#[must_use]
pub fn spawn_random_tile_with<R: RandomSource + ?Sized>(
    board: Board,
    rng: &mut R,
    four_probability: f64,
) -> Board {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return board;
    }

    let cell = empty[rng.gen_index(empty.len())];
    let value = if rng.gen_unit() < 1.0 - four_probability { 2 } else { 4 };
    board.with_tile(cell, value)
}

/// A fresh board holding two spawned tiles.
#[must_use]
pub fn initial_board<R: RandomSource + ?Sized>(rng: &mut R) -> Board {
    initial_board_with(rng, DEFAULT_FOUR_PROBABILITY)
}

/// `initial_board` with a custom probability of spawning a 4.
#[must_use]
pub fn initial_board_with<R: RandomSource + ?Sized>(rng: &mut R, four_probability: f64) -> Board {
    let board = spawn_random_tile_with(create_empty_board(), rng, four_probability);
    spawn_random_tile_with(board, rng, four_probability)
}

/// Slide every tile toward `direction` and merge equal neighbors once.
///
/// Does not spawn and does not score; callers compare the result with the
/// input to detect a no-op move.
///
/// ```
/// use twenty48::core::{Board, Direction};
/// use twenty48::rules::apply_move;
///
/// let board = Board::new([
///     [2, 2, 2, 2],
///     [0, 2, 0, 4],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ]);
/// let moved = apply_move(board, Direction::Left);
/// assert_eq!(moved.rows()[0], [4, 4, 0, 0]);
/// assert_eq!(moved.rows()[1], [2, 4, 0, 0]);
/// ```
#[must_use]
pub fn apply_move(board: Board, direction: Direction) -> Board {
    apply_move_counted(board, direction).0
}

/// `apply_move`, also returning how many merges happened.
#[must_use]
pub fn apply_move_counted(board: Board, direction: Direction) -> (Board, usize) {
    let mut merges = 0;
    let slid = orient(board, direction).map_rows(|row| {
        let result = slide_line(row);
        merges += result.merges;
        result.line
    });
    (unorient(slid, direction), merges)
}

/// Deep cell-wise equality.
#[must_use]
pub fn boards_equal(a: &Board, b: &Board) -> bool {
    a == b
}

/// Sum of all tile values. This is the score.
#[must_use]
pub fn sum_board(board: &Board) -> Score {
    board.sum()
}

/// True if the board is full and no horizontal or vertical neighbors match.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    let cells = board.rows();
    for r in 0..SIZE {
        for c in 0..SIZE {
            let v = cells[r][c];
            if v == 0 {
                return false;
            }
            if c + 1 < SIZE && v == cells[r][c + 1] {
                return false;
            }
            if r + 1 < SIZE && v == cells[r + 1][c] {
                return false;
            }
        }
    }
    true
}

/// True if any cell equals `target`.
#[must_use]
pub fn contains_value(board: &Board, target: Tile) -> bool {
    board.contains(target)
}

/// Whether moving in `direction` would change the board.
#[must_use]
pub fn can_move(board: Board, direction: Direction) -> bool {
    !boards_equal(&apply_move(board, direction), &board)
}

/// Directions that would change the board, in `Direction::ALL` order.
#[must_use]
pub fn legal_moves(board: Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(board, dir))
        .collect()
}

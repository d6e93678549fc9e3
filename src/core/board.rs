//! The 4x4 board value.
//!
//! ## Representation
//!
//! `Board` is a plain `[[Tile; SIZE]; SIZE]` in row-major order. It is `Copy`,
//! so every engine operation takes a board by value and hands back a new one;
//! callers never observe aliasing between an input and an output.
//!
//! `0` is an empty cell. Every other cell holds a power of two between 2 and
//! `MAX_TILE`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::BoardError;

/// Board dimension (rows == columns).
pub const SIZE: usize = 4;

/// Tile value that wins the game.
pub const TARGET: Tile = 2048;

/// Largest tile `validate` accepts.
///
/// No 4x4 game can build anything bigger. Doubling it and summing a board of
/// it both stay far inside `u32`.
pub const MAX_TILE: Tile = 1 << 18;

/// A single cell value. `0` means empty.
pub type Tile = u32;

/// Score is the sum of all tile values on the board.
pub type Score = u32;

/// A row/column position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a cell position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A 4x4 grid of tiles.
///
/// ```
/// use twenty48::core::Board;
///
/// let board = Board::from_rows(vec![
///     vec![2, 0, 0, 0],
///     vec![0, 0, 0, 0],
///     vec![0, 0, 4, 0],
///     vec![0, 0, 0, 0],
/// ]).unwrap();
///
/// assert_eq!(board.count_tiles(), 2);
/// assert_eq!(board.sum(), 6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Tile; SIZE]; SIZE],
}

impl Board {
    /// The board with every cell empty.
    pub const EMPTY: Board = Board { cells: [[0; SIZE]; SIZE] };

    /// Wrap a grid without validation.
    ///
    /// Use `from_rows` for input that may hold non power-of-two tiles.
    #[must_use]
    pub const fn new(cells: [[Tile; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Build a board from dynamically sized rows, checking shape and tile values.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, BoardError> {
        if rows.len() != SIZE {
            return Err(BoardError::WrongRowCount(rows.len()));
        }

        let mut cells = [[0; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != SIZE {
                return Err(BoardError::WrongRowLength { row: r, len: row.len() });
            }
            cells[r].copy_from_slice(row);
        }

        let board = Self { cells };
        board.validate()?;
        Ok(board)
    }

    /// Check that every non-empty tile is a power of two in `2..=MAX_TILE`.
    pub fn validate(&self) -> Result<(), BoardError> {
        for (cell, value) in self.iter_cells() {
            if value != 0 && (value == 1 || !value.is_power_of_two()) {
                return Err(BoardError::NotPowerOfTwo {
                    row: cell.row,
                    col: cell.col,
                    value,
                });
            }
            if value > MAX_TILE {
                return Err(BoardError::TileTooLarge {
                    row: cell.row,
                    col: cell.col,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Borrow the raw grid.
    #[must_use]
    pub const fn rows(&self) -> &[[Tile; SIZE]; SIZE] {
        &self.cells
    }

    /// Value at a cell.
    #[must_use]
    pub const fn get(&self, cell: Cell) -> Tile {
        self.cells[cell.row][cell.col]
    }

    /// Return a copy of this board with one cell replaced.
    #[must_use]
    pub fn with_tile(mut self, cell: Cell, value: Tile) -> Self {
        self.cells[cell.row][cell.col] = value;
        self
    }

    /// Iterate over every cell in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &v)| (Cell::new(r, c), v))
        })
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.iter_cells()
            .filter(|&(_, v)| v == 0)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn count_tiles(&self) -> usize {
        SIZE * SIZE - self.count_empty()
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn sum(&self) -> Score {
        self.cells.iter().flatten().sum()
    }

    /// Largest tile on the board (0 when empty).
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// True if any cell equals `target` exactly.
    #[must_use]
    pub fn contains(&self, target: Tile) -> bool {
        self.cells.iter().flatten().any(|&v| v == target)
    }

    /// True if some tile has reached or passed `target`.
    #[must_use]
    pub fn reaches(&self, target: Tile) -> bool {
        self.max_tile() >= target
    }

    /// Swap rows and columns.
    #[must_use]
    pub fn transpose(self) -> Self {
        let mut cells = [[0; SIZE]; SIZE];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[c][r] = v;
            }
        }
        Self { cells }
    }

    /// Mirror each row left-to-right.
    #[must_use]
    pub fn reverse_rows(mut self) -> Self {
        for row in &mut self.cells {
            row.reverse();
        }
        self
    }

    /// Apply `f` to every row, producing a new board.
    #[must_use]
    pub fn map_rows(self, mut f: impl FnMut([Tile; SIZE]) -> [Tile; SIZE]) -> Self {
        Self {
            cells: self.cells.map(&mut f),
        }
    }
}

impl From<[[Tile; SIZE]; SIZE]> for Board {
    fn from(cells: [[Tile; SIZE]; SIZE]) -> Self {
        Self::new(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if v == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{v:>5}")?;
                }
            }
        }
        Ok(())
    }
}

//! Single-line slide and merge.
//!
//! Every direction is handled by the same leftward line algorithm. The board
//! is re-oriented so the leading edge is on the left, each row is slid, and
//! the orientation is undone.

use smallvec::SmallVec;

use crate::core::{Board, Direction, Tile, SIZE};

/// Result of sliding one line toward index 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSlide {
    /// The line after compaction, merging and padding.
    pub line: [Tile; SIZE],
    /// Number of pairs merged.
    pub merges: usize,
}

/// Slide one line toward index 0.
///
/// 1. Drop empty cells, keeping order.
/// 2. Scan from the leading edge; an equal neighbor pair becomes one doubled
///    tile and the scan skips past both, so a tile merges at most once.
/// 3. Pad with empty cells at the trailing edge.
///
/// ```
/// use twenty48::rules::slide_line;
///
/// assert_eq!(slide_line([2, 2, 2, 2]).line, [4, 4, 0, 0]);
/// assert_eq!(slide_line([0, 2, 0, 4]).line, [2, 4, 0, 0]);
/// ```
#[must_use]
pub fn slide_line(line: [Tile; SIZE]) -> LineSlide {
    let compacted: SmallVec<[Tile; SIZE]> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0; SIZE];
    let mut merges = 0;
    let mut write = 0;
    let mut i = 0;
    while i < compacted.len() {
        let value = compacted[i];
        if i + 1 < compacted.len() && compacted[i + 1] == value {
            out[write] = value * 2;
            merges += 1;
            i += 2;
        } else {
            out[write] = value;
            i += 1;
        }
        write += 1;
    }

    LineSlide { line: out, merges }
}

/// Turn `board` so that `direction`'s leading edge is on the left.
#[must_use]
pub fn orient(board: Board, direction: Direction) -> Board {
    let board = if direction.is_vertical() { board.transpose() } else { board };
    if direction.is_reversed() {
        board.reverse_rows()
    } else {
        board
    }
}

/// Undo `orient`.
#[must_use]
pub fn unorient(board: Board, direction: Direction) -> Board {
    let board = if direction.is_reversed() { board.reverse_rows() } else { board };
    if direction.is_vertical() {
        board.transpose()
    } else {
        board
    }
}

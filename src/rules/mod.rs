//! The board engine.
//!
//! Pure operations over `Board` values:
//! - Slide and merge in one of four directions
//! - Random tile spawning through an injected `RandomSource`
//! - Score, win and terminal queries
//!
//! The four directions share one line algorithm (`slide_line`); the board is
//! re-oriented around it rather than duplicating merge logic per direction.

pub mod engine;
pub mod slide;

pub use engine::{
    apply_move, apply_move_counted, boards_equal, can_move, contains_value, create_empty_board,
    initial_board, initial_board_with, is_terminal, legal_moves, spawn_random_tile,
    spawn_random_tile_with, sum_board,
};
pub use slide::{slide_line, LineSlide};

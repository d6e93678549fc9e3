//! Board engine integration tests.
//!
//! These exercise the public engine operations end to end: moves in every
//! direction, spawning with scripted and seeded sources, and the terminal
//! and win queries.

use twenty48::core::{Board, Cell, Direction, GameRng, ScriptedSource, SIZE};
use twenty48::rules::{
    apply_move, apply_move_counted, boards_equal, contains_value, create_empty_board,
    initial_board, is_terminal, legal_moves, spawn_random_tile, sum_board,
};

fn reverse(board: Board) -> Board {
    board.reverse_rows()
}

fn transpose(board: Board) -> Board {
    board.transpose()
}

// =============================================================================
// Move Tests
// =============================================================================

#[test]
fn test_merge_once_per_move() {
    let board = Board::new([
        [2, 2, 2, 2],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    assert_eq!(apply_move(board, Direction::Left).rows()[0], [4, 4, 0, 0]);
    assert_eq!(apply_move(board, Direction::Right).rows()[0], [0, 0, 4, 4]);
}

#[test]
fn test_compaction_preserves_order() {
    let board = Board::new([
        [0, 2, 0, 4],
        [8, 0, 16, 0],
        [0, 0, 0, 0],
        [32, 64, 0, 128],
    ]);
    let moved = apply_move(board, Direction::Left);
    assert_eq!(moved.rows()[0], [2, 4, 0, 0]);
    assert_eq!(moved.rows()[1], [8, 16, 0, 0]);
    assert_eq!(moved.rows()[2], [0, 0, 0, 0]);
    assert_eq!(moved.rows()[3], [32, 64, 128, 0]);
}

#[test]
fn test_column_merges() {
    let board = Board::new([
        [2, 4, 0, 8],
        [2, 0, 0, 8],
        [4, 4, 0, 8],
        [4, 0, 0, 8],
    ]);
    let up = apply_move(board, Direction::Up);
    assert_eq!(
        up,
        Board::new([
            [4, 8, 0, 16],
            [8, 0, 0, 16],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ])
    );

    let down = apply_move(board, Direction::Down);
    assert_eq!(
        down,
        Board::new([
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [4, 0, 0, 16],
            [8, 8, 0, 16],
        ])
    );
}

#[test]
fn test_directional_symmetry() {
    let board = Board::new([
        [2, 2, 4, 0],
        [0, 4, 4, 4],
        [8, 0, 8, 2],
        [16, 16, 16, 16],
    ]);

    assert_eq!(
        apply_move(board, Direction::Right),
        reverse(apply_move(reverse(board), Direction::Left))
    );
    assert_eq!(
        apply_move(board, Direction::Up),
        transpose(apply_move(transpose(board), Direction::Left))
    );
    assert_eq!(
        apply_move(board, Direction::Down),
        transpose(apply_move(transpose(board), Direction::Right))
    );
}

#[test]
fn test_noop_scenario() {
    let board = Board::new([
        [2, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    assert!(boards_equal(&apply_move(board, Direction::Left), &board));
    assert!(boards_equal(&apply_move(board, Direction::Up), &board));
}

#[test]
fn test_move_conserves_sum() {
    let board = Board::new([
        [2, 2, 4, 8],
        [2, 2, 4, 8],
        [0, 0, 0, 0],
        [4, 0, 4, 0],
    ]);
    for dir in Direction::ALL {
        let (moved, merges) = apply_move_counted(board, dir);
        assert_eq!(sum_board(&moved), sum_board(&board), "{dir}");
        assert_eq!(moved.count_tiles(), board.count_tiles() - merges, "{dir}");
    }
}

// =============================================================================
// Spawn Tests
// =============================================================================

#[test]
fn test_initial_board_has_two_small_tiles() {
    for seed in 0..50 {
        let mut rng = GameRng::new(seed);
        let board = initial_board(&mut rng);
        assert_eq!(board.count_tiles(), 2);
        assert!(board.iter_cells().all(|(_, v)| v == 0 || v == 2 || v == 4));
    }
}

#[test]
fn test_spawn_full_board_unchanged() {
    let full = Board::new([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    let mut rng = GameRng::new(1);
    assert_eq!(spawn_random_tile(full, &mut rng), full);
}

#[test]
fn test_spawn_fills_only_empty_cell() {
    let board = Board::new([[8; SIZE]; SIZE]).with_tile(Cell::new(3, 2), 0);
    for seed in 0..20 {
        let mut rng = GameRng::new(seed);
        let spawned = spawn_random_tile(board, &mut rng);
        let value = spawned.get(Cell::new(3, 2));
        assert!(value == 2 || value == 4);
        assert_eq!(spawned.with_tile(Cell::new(3, 2), 0), board);
    }
}

#[test]
fn test_spawn_distribution() {
    let mut rng = GameRng::new(2024);
    let mut fours = 0;
    let mut cells = [0usize; SIZE * SIZE];
    let trials = 20_000;

    for _ in 0..trials {
        let spawned = spawn_random_tile(create_empty_board(), &mut rng);
        let (cell, value) = spawned
            .iter_cells()
            .find(|&(_, v)| v != 0)
            .expect("one tile spawned");
        cells[cell.row * SIZE + cell.col] += 1;
        if value == 4 {
            fours += 1;
        }
    }

    let ratio = fours as f64 / trials as f64;
    assert!((0.08..0.12).contains(&ratio), "four ratio {ratio}");

    // Every cell chosen roughly 1/16 of the time
    let expected = trials / (SIZE * SIZE);
    for count in cells {
        assert!(count > expected * 8 / 10 && count < expected * 12 / 10, "{count}");
    }
}

#[test]
fn test_scripted_spawn_sequence() {
    let mut source = ScriptedSource::new()
        .with_spawn(0, false)
        .with_spawn(14, true)
        .with_spawn(0, false);

    let board = initial_board(&mut source);
    assert_eq!(board.get(Cell::new(0, 0)), 2);
    assert_eq!(board.get(Cell::new(3, 3)), 4);

    let moved = apply_move(board, Direction::Down);
    let spawned = spawn_random_tile(moved, &mut source);
    assert_eq!(spawned.get(Cell::new(0, 0)), 2);
    assert_eq!(spawned.get(Cell::new(3, 0)), 2);
    assert_eq!(spawned.get(Cell::new(3, 3)), 4);
    assert_eq!(spawned.count_tiles(), 3);
}

// =============================================================================
// Terminal / Win Tests
// =============================================================================

#[test]
fn test_checkerboard_is_terminal() {
    let board = Board::new([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    assert!(is_terminal(&board));
    for dir in Direction::ALL {
        assert_eq!(apply_move(board, dir), board);
    }
}

#[test]
fn test_full_board_with_pair_not_terminal() {
    let board = Board::new([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 8, 8],
    ]);
    assert!(!is_terminal(&board));
    assert_eq!(legal_moves(board), vec![Direction::Left, Direction::Right]);
}

#[test]
fn test_contains_target() {
    let board = Board::new([
        [1024, 1024, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    assert!(!contains_value(&board, 2048));
    let moved = apply_move(board, Direction::Left);
    assert!(contains_value(&moved, 2048));
}

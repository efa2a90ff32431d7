//! 15-puzzle integration tests.

use proptest::prelude::*;
use puzzle_engine::core::{EngineError, FifteenConfig, GameRng, ManualClock, MoveOutcome, Progress, WinMode};
use puzzle_engine::games::fifteen::{is_adjacent, is_solvable, target_permutation, Board, FifteenGame, CELL_COUNT};
use puzzle_engine::rules::PuzzleEngine;

fn solved_game(mode: WinMode) -> FifteenGame {
    FifteenGame::with_board(
        FifteenConfig::new().with_win_mode(mode).with_seed(0),
        Board::target(mode),
        &ManualClock::new(),
    )
}

// =============================================================================
// Solvability
// =============================================================================

#[test]
fn test_solved_board_is_solvable() {
    assert!(is_solvable(Board::solved().cells()));
}

/// Exchanging tiles 14 and 15 flips the parity class.
#[test]
fn test_swapped_tiles_unsolvable() {
    let board = Board::from_cells(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0]).unwrap();
    assert!(!board.is_solvable());
}

/// Vertical slides shift the inversion count and the blank row together.
#[test]
fn test_blank_row_counts() {
    // Solved board with the blank walked up column 3: still reachable.
    let mut game = solved_game(WinMode::Normal);
    for cell in [11, 7, 3] {
        assert_eq!(game.attempt_move(cell), Ok(MoveOutcome::Moved));
        assert!(game.board().is_solvable());
    }
    assert_eq!(game.board().blank_index(), 3);
}

// =============================================================================
// Moves
// =============================================================================

#[test]
fn test_moves_from_solved_board() {
    let mut game = solved_game(WinMode::Normal);

    assert_eq!(game.attempt_move(0), Ok(MoveOutcome::Rejected));
    assert_eq!(game.board(), &Board::solved());

    assert_eq!(game.attempt_move(14), Ok(MoveOutcome::Moved));
    assert_eq!(game.board().blank_index(), 14);
    assert_eq!(game.board().get(15), Ok(15));
}

/// Diagonal neighbours of the blank do not move.
#[test]
fn test_diagonal_rejected() {
    let mut game = solved_game(WinMode::Normal);
    assert_eq!(game.attempt_move(10), Ok(MoveOutcome::Rejected));
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_invalid_cell_is_an_error() {
    let mut game = solved_game(WinMode::Normal);
    assert_eq!(
        game.play(99),
        Err(EngineError::CellOutOfRange { index: 99, count: CELL_COUNT })
    );
    assert_eq!(game.move_count(), 0);
}

/// Moving out of and back into the target reports a win on the way back.
#[test]
fn test_play_reports_solved() {
    for mode in WinMode::ALL {
        let mut game = solved_game(mode);
        let blank = game.board().blank_index();
        let neighbour = game.board().movable_cells()[0];

        assert_eq!(game.play(neighbour), Ok(Progress::Moved));
        assert_eq!(game.play(blank), Ok(Progress::Solved), "{mode}");
    }
}

// =============================================================================
// Win modes
// =============================================================================

#[test]
fn test_target_permutations() {
    assert_eq!(
        target_permutation(WinMode::Normal),
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]
    );
    assert_eq!(
        target_permutation(WinMode::Reversed),
        [0, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]
    );
    assert_eq!(
        target_permutation(WinMode::ColumnMajor),
        [1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15, 4, 8, 12, 0]
    );
    assert_eq!(
        target_permutation(WinMode::SkipPattern),
        [1, 3, 5, 7, 2, 4, 6, 8, 9, 11, 13, 15, 10, 12, 14, 0]
    );
}

/// Each target only wins under its own mode.
#[test]
fn test_win_modes_are_exclusive() {
    for target in WinMode::ALL {
        let game = solved_game(target);
        for mode in WinMode::ALL {
            assert_eq!(game.check_win_for(mode), mode == target);
        }
    }
}

/// Win checks and overlays are pure.
#[test]
fn test_queries_are_idempotent() {
    let game = FifteenGame::new(FifteenConfig::new().with_seed(21), &ManualClock::new());
    let board = *game.board();

    let first = (game.check_win(), game.target_permutation());
    for _ in 0..5 {
        assert_eq!((game.check_win(), game.target_permutation()), first);
    }
    assert_eq!(game.board(), &board);
    assert_eq!(game.move_count(), 0);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Every shuffled board is solvable.
    #[test]
    fn prop_shuffle_is_solvable(seed in any::<u64>()) {
        let board = Board::shuffled(&mut GameRng::new(seed));
        prop_assert!(board.is_solvable());
        prop_assert!(Board::from_cells(board.cells()).is_ok());
    }

    /// Taps keep the board a permutation in the same parity class, and only
    /// taps next to the blank move anything.
    #[test]
    fn prop_taps_preserve_board(
        seed in any::<u64>(),
        taps in prop::collection::vec(0usize..CELL_COUNT, 0..100),
    ) {
        let mut game = FifteenGame::new(FifteenConfig::new().with_seed(seed), &ManualClock::new());

        for cell in taps {
            let before = *game.board();
            let outcome = game.attempt_move(cell).unwrap();

            prop_assert_eq!(outcome.is_moved(), is_adjacent(cell, before.blank_index()));
            if outcome.is_moved() {
                prop_assert_eq!(game.board().blank_index(), cell);
            } else {
                prop_assert_eq!(game.board(), &before);
            }
            prop_assert!(game.board().is_solvable());
            prop_assert!(Board::from_cells(game.board().cells()).is_ok());
        }
    }
}

use std::time::Instant;

use serde::Serialize;

use crate::core::config::WinMode;
use crate::games::fifteen::{FifteenGame, CELL_COUNT};
use crate::games::hanoi::{HanoiGame, Selection};
use crate::rules::PuzzleEngine;

/// Everything a Hanoi view draws.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HanoiSnapshot {
    /// Towers bottom to top.
    pub towers: Vec<Vec<u8>>,
    pub selection: Selection,
    pub disk_count: usize,
    pub move_count: u32,
    pub min_moves: u32,
    /// Percent; see `HanoiGame::affinity`.
    pub affinity: u32,
    pub elapsed_secs: u64,
    pub solved: bool,
}

impl HanoiSnapshot {
    /// Capture `game` as of `now`.
    #[must_use]
    pub fn capture(game: &HanoiGame, now: Instant) -> Self {
        Self {
            towers: game.towers().to_vecs(),
            selection: game.selection(),
            disk_count: game.disk_count(),
            move_count: game.move_count(),
            min_moves: game.min_moves(),
            affinity: game.affinity(),
            elapsed_secs: game.elapsed(now).as_secs(),
            solved: game.check_win(),
        }
    }
}

/// Everything a 15-puzzle view draws, including the solution overlay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FifteenSnapshot {
    pub board: [u8; CELL_COUNT],
    pub win_mode: WinMode,
    /// Target arrangement for `win_mode`.
    pub solution: [u8; CELL_COUNT],
    /// Cells that would slide if tapped.
    pub movable: Vec<usize>,
    pub move_count: u32,
    pub elapsed_secs: u64,
    pub solvable: bool,
    pub solved: bool,
}

impl FifteenSnapshot {
    /// Capture `game` as of `now`.
    #[must_use]
    pub fn capture(game: &FifteenGame, now: Instant) -> Self {
        let board = game.board();
        Self {
            board: *board.cells(),
            win_mode: game.win_mode(),
            solution: game.target_permutation(),
            movable: board.movable_cells(),
            move_count: game.move_count(),
            elapsed_secs: game.elapsed(now).as_secs(),
            solvable: board.is_solvable(),
            solved: game.check_win(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::clock::{Clock, ManualClock};
    use crate::core::config::{FifteenConfig, HanoiConfig};
    use crate::games::fifteen::Board;

    #[test]
    fn test_hanoi_snapshot() {
        let clock = ManualClock::new();
        let mut game = HanoiGame::start(HanoiConfig::new(3), &clock);
        game.select_or_move(0).unwrap();
        clock.advance(Duration::from_secs(65));

        let snap = HanoiSnapshot::capture(&game, clock.now());
        assert_eq!(snap.towers, vec![vec![3, 2, 1], vec![], vec![]]);
        assert_eq!(snap.selection, Selection::Pending(0));
        assert_eq!(snap.min_moves, 7);
        assert_eq!(snap.affinity, 700);
        assert_eq!(snap.elapsed_secs, 65);
        assert!(!snap.solved);

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["moveCount"], 0);
        assert_eq!(json["selection"]["Pending"], 0);
    }

    #[test]
    fn test_fifteen_snapshot() {
        let clock = ManualClock::new();
        let game = FifteenGame::with_board(FifteenConfig::new(), Board::solved(), &clock);

        let snap = FifteenSnapshot::capture(&game, clock.now());
        assert_eq!(snap.board, snap.solution);
        assert_eq!(snap.movable, vec![11, 14]);
        assert!(snap.solvable);
        assert!(snap.solved);

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["winMode"], "normal");
        assert_eq!(json["solution"][15], 0);
    }
}

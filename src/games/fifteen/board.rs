//! The 4x4 sliding board.
//!
//! Cells are stored row-major; `0` is the blank. A `Board` always holds a
//! permutation of `0..16`: construction validates it and the only mutation
//! swaps the blank with an orthogonal neighbour.

use std::fmt;

use serde::Serialize;

use crate::core::action::MoveOutcome;
use crate::core::config::WinMode;
use crate::core::error::{EngineError, Result};
use crate::core::rng::GameRng;

/// Cells per row and per column.
pub const SIDE: usize = 4;

/// Cells on the board.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// The blank cell value.
pub const BLANK: u8 = 0;

const NORMAL: [u8; CELL_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0];
const REVERSED: [u8; CELL_COUNT] = [0, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
const COLUMN_MAJOR: [u8; CELL_COUNT] = [1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15, 4, 8, 12, 0];
const SKIP_PATTERN: [u8; CELL_COUNT] = [1, 3, 5, 7, 2, 4, 6, 8, 9, 11, 13, 15, 10, 12, 14, 0];

/// The arrangement that wins under `mode`.
#[must_use]
pub const fn target_permutation(mode: WinMode) -> [u8; CELL_COUNT] {
    match mode {
        WinMode::Normal => NORMAL,
        WinMode::Reversed => REVERSED,
        WinMode::ColumnMajor => COLUMN_MAJOR,
        WinMode::SkipPattern => SKIP_PATTERN,
    }
}

/// Row and column of a cell index.
#[must_use]
pub const fn coords(index: usize) -> (usize, usize) {
    (index / SIDE, index % SIDE)
}

/// Whether two cells share an edge (Manhattan distance exactly 1).
#[must_use]
pub fn is_adjacent(a: usize, b: usize) -> bool {
    let (ra, ca) = coords(a);
    let (rb, cb) = coords(b);
    ra.abs_diff(rb) + ca.abs_diff(cb) == 1
}

/// Whether `cells` can reach the standard solved layout by sliding.
///
/// Counts inversions among the non-blank tiles in reading order and adds the
/// blank's distance in rows from the bottom; the layout is solvable when the
/// sum is even. Expects a permutation of `0..16`.
#[must_use]
pub fn is_solvable(cells: &[u8; CELL_COUNT]) -> bool {
    let inversions = count_inversions(cells);
    let blank_row = cells.iter().position(|&c| c == BLANK).map_or(0, |i| coords(i).0);
    let rows_from_bottom = SIDE - 1 - blank_row;
    (inversions + rows_from_bottom) % 2 == 0
}

fn count_inversions(cells: &[u8; CELL_COUNT]) -> usize {
    let tiles: Vec<u8> = cells.iter().copied().filter(|&c| c != BLANK).collect();
    tiles
        .iter()
        .enumerate()
        .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| a > b).count())
        .sum()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [u8; CELL_COUNT],
}

impl Board {
    /// The winning board for `mode`.
    #[must_use]
    pub const fn target(mode: WinMode) -> Self {
        Self {
            cells: target_permutation(mode),
        }
    }

    /// Standard solved board: 1..15, blank last.
    #[must_use]
    pub const fn solved() -> Self {
        Self::target(WinMode::Normal)
    }

    /// Build a board from row-major cells, which must be a permutation of `0..16`.
    pub fn from_cells(cells: &[u8]) -> Result<Self> {
        let cells: [u8; CELL_COUNT] = cells.try_into().map_err(|_| {
            EngineError::InvalidBoard(format!("expected {CELL_COUNT} cells, got {}", cells.len()))
        })?;

        let mut seen = [false; CELL_COUNT];
        for &value in &cells {
            let slot = usize::from(value);
            if slot >= CELL_COUNT {
                return Err(EngineError::InvalidBoard(format!(
                    "value {value} outside 0..{CELL_COUNT}"
                )));
            }
            if seen[slot] {
                return Err(EngineError::InvalidBoard(format!("value {value} repeated")));
            }
            seen[slot] = true;
        }

        Ok(Self { cells })
    }

    /// Draw a uniformly random solvable board.
    ///
    /// Shuffles the solved layout and redraws until the result passes
    /// `is_solvable`. Half of all permutations pass, so this settles fast.
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cells = NORMAL;
        loop {
            rng.shuffle(&mut cells);
            if is_solvable(&cells) {
                return Self { cells };
            }
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Value at `index`.
    pub fn get(&self, index: usize) -> Result<u8> {
        self.cells
            .get(index)
            .copied()
            .ok_or(EngineError::CellOutOfRange {
                index,
                count: CELL_COUNT,
            })
    }

    /// Index of the blank cell.
    #[must_use]
    pub fn blank_index(&self) -> usize {
        // Every board holds exactly one blank.
        self.cells.iter().position(|&c| c == BLANK).unwrap_or(CELL_COUNT - 1)
    }

    #[must_use]
    pub fn is_solvable(&self) -> bool {
        is_solvable(&self.cells)
    }

    /// Whether this board matches the target for `mode` exactly.
    #[must_use]
    pub fn matches(&self, mode: WinMode) -> bool {
        self.cells == target_permutation(mode)
    }

    /// Slide the tile at `index` into the blank if they share an edge.
    pub fn slide(&mut self, index: usize) -> Result<MoveOutcome> {
        if index >= CELL_COUNT {
            return Err(EngineError::CellOutOfRange {
                index,
                count: CELL_COUNT,
            });
        }

        let blank = self.blank_index();
        if !is_adjacent(index, blank) {
            return Ok(MoveOutcome::Rejected);
        }

        self.cells.swap(index, blank);
        Ok(MoveOutcome::Moved)
    }

    /// Cells that can slide into the blank right now.
    #[must_use]
    pub fn movable_cells(&self) -> Vec<usize> {
        let blank = self.blank_index();
        (0..CELL_COUNT).filter(|&i| is_adjacent(i, blank)).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIDE) {
            let line: Vec<String> = row
                .iter()
                .map(|&c| if c == BLANK { " .".to_string() } else { format!("{c:2}") })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

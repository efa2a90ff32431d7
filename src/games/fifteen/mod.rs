//! Sliding 15-puzzle.
//!
//! A 4x4 board holding tiles 1-15 and one blank:
//! - Tapping a tile next to the blank slides it in
//! - New boards are uniform random draws restricted to solvable layouts
//! - The win depends on the chosen `WinMode` target arrangement

mod board;
mod game;

pub use board::{coords, is_adjacent, is_solvable, target_permutation, Board, BLANK, CELL_COUNT, SIDE};
pub use game::FifteenGame;

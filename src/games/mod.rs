//! Puzzle implementations.

pub mod fifteen;
pub mod hanoi;

pub use fifteen::{Board, FifteenGame};
pub use hanoi::{HanoiGame, Selection, TowerClick, TowerMove, Towers};

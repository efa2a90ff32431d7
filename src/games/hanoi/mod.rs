//! Tower of Hanoi.
//!
//! Three towers, 3 to 8 disks, all starting on tower 0:
//! - A disk may only go onto an empty tower or a larger disk
//! - Players pick a source tower, then a target tower
//! - The game is won when every disk sits on tower 2
//!
//! Difficulty is the disk count; the optimum is 2^n - 1 moves.

mod game;
mod towers;

pub use game::{HanoiGame, Selection, TowerClick, TowerMove};
pub use towers::{Tower, Towers, TARGET_TOWER, TOWER_COUNT};

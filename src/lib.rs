//! # puzzle-engine
//!
//! Game-state engine for two browser puzzles: Tower of Hanoi and the sliding
//! 15-puzzle.
//!
//! ## Design Principles
//!
//! 1. **Sessions, not globals**: every game is an explicitly constructed
//!    value that owns its state. Nothing is shared between games.
//!
//! 2. **Rejections are outcomes**: an illegal move returns
//!    `MoveOutcome::Rejected` and leaves the state untouched. `EngineError`
//!    only signals caller bugs such as an out-of-range index.
//!
//! 3. **Win checks are queries**: moves never decide the game is over;
//!    `is_solved` / `check_win` are pure and can be asked at any time.
//!
//! 4. **No rendering**: views poll snapshots from `view`.
//!
//! ## Modules
//!
//! - `core`: Outcomes, lifecycle, clock, RNG, configuration, errors
//! - `rules`: `PuzzleEngine` trait both games implement
//! - `games`: Hanoi and 15-puzzle rules
//! - `view`: Serializable snapshots for presentation layers
//!
//! ## Example
//!
//! ```
//! use puzzle_engine::{HanoiConfig, HanoiGame, MoveOutcome, PuzzleEngine, SystemClock, TowerClick};
//!
//! let mut game = HanoiGame::start(HanoiConfig::new(3), &SystemClock);
//! assert_eq!(game.select_or_move(0), Ok(TowerClick::Selected(0)));
//! assert_eq!(game.select_or_move(2), Ok(TowerClick::Attempted(MoveOutcome::Moved)));
//! assert_eq!(game.move_count(), 1);
//! assert!(!game.is_solved());
//! ```

pub mod core;
pub mod games;
pub mod rules;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Clock, ManualClock, SystemClock,
    EngineError, Result,
    FifteenConfig, HanoiConfig, WinMode,
    GameLifecycle, GameRng, GameRngState,
    MoveOutcome, MoveRecord, Progress,
};

pub use crate::games::{Board, FifteenGame, HanoiGame, Selection, TowerClick, TowerMove, Towers};

pub use crate::rules::PuzzleEngine;

pub use crate::view::{FifteenSnapshot, HanoiSnapshot};

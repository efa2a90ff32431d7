//! Rules engine trait for puzzle implementations.
//!
//! Puzzles implement `PuzzleEngine` to define:
//! - How a move intent changes the state
//! - When the puzzle is solved
//! - How a game restarts
//!
//! Shared code (`play`, `replay`, snapshots) calls into `PuzzleEngine` but
//! never interprets puzzle-specific concepts directly.

pub mod engine;

pub use engine::PuzzleEngine;

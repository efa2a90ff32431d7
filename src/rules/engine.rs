//! Rules engine trait for puzzle implementations.
//!
//! Puzzles implement `PuzzleEngine` to define their rules:
//! - How an intent changes the state (or is rejected)
//! - When the puzzle counts as solved
//! - How a game restarts

use crate::core::action::{MoveOutcome, Progress};
use crate::core::clock::Clock;
use crate::core::error::Result;
use crate::core::lifecycle::GameLifecycle;

/// Puzzle rules trait.
///
/// ## Implementation Notes
///
/// - `apply`: illegal moves return `Ok(MoveOutcome::Rejected)` and leave the
///   state untouched; `Err` is only for caller contract violations
/// - `apply`: must be deterministic so replays reproduce the same state
/// - `is_solved`: pure query, never mutates
pub trait PuzzleEngine {
    /// One player move.
    type Intent: Clone;

    /// Apply a move intent.
    fn apply(&mut self, intent: Self::Intent) -> Result<MoveOutcome>;

    /// Whether the current state is a win.
    fn is_solved(&self) -> bool;

    /// Move counter, start timestamp and history.
    fn lifecycle(&self) -> &GameLifecycle<Self::Intent>;

    /// Start over with the same configuration.
    fn restart(&mut self, clock: &dyn Clock);

    // === Convenience Methods ===

    /// Apply an intent, then ask whether the puzzle is solved.
    fn play(&mut self, intent: Self::Intent) -> Result<Progress> {
        let outcome = self.apply(intent)?;
        Ok(Progress::from_outcome(outcome, self.is_solved()))
    }

    /// Apply intents in order. Stops at the first caller error.
    ///
    /// Returns the outcome of each intent applied.
    fn replay<I>(&mut self, intents: I) -> Result<Vec<MoveOutcome>>
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().map(|intent| self.apply(intent)).collect()
    }

    /// Number of accepted moves so far.
    fn move_count(&self) -> u32 {
        self.lifecycle().move_count()
    }
}

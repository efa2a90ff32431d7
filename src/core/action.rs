//! Move outcomes and move history records.
//!
//! Every player intent ends in one of two ways: the state changed
//! (`Moved`) or it did not (`Rejected`). `Progress` folds the separate win
//! query into the answer for hosts that want a single value per intent.

use serde::{Deserialize, Serialize};

/// Result of applying one move intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// State changed and the move counter advanced.
    Moved,
    /// Illegal move. State and move counter unchanged.
    Rejected,
}

impl MoveOutcome {
    #[must_use]
    pub fn is_moved(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Outcome of a move combined with the post-move win query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Progress {
    Rejected,
    Moved,
    /// The move was accepted and the puzzle is now solved.
    Solved,
}

impl Progress {
    /// Combine a move outcome with the win query made after it.
    #[must_use]
    pub fn from_outcome(outcome: MoveOutcome, solved: bool) -> Self {
        match (outcome, solved) {
            (MoveOutcome::Rejected, _) => Self::Rejected,
            (MoveOutcome::Moved, false) => Self::Moved,
            (MoveOutcome::Moved, true) => Self::Solved,
        }
    }
}

/// An accepted move, kept for history display and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord<I> {
    /// 1-based position of this move within the game.
    pub sequence: u32,

    /// The intent that produced the move.
    pub intent: I,
}

impl<I> MoveRecord<I> {
    #[must_use]
    pub fn new(sequence: u32, intent: I) -> Self {
        Self { sequence, intent }
    }
}

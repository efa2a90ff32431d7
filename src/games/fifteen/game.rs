//! 15-puzzle game session.

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use super::board::{target_permutation, Board, CELL_COUNT};
use crate::core::action::MoveOutcome;
use crate::core::clock::Clock;
use crate::core::config::{FifteenConfig, WinMode};
use crate::core::error::Result;
use crate::core::lifecycle::GameLifecycle;
use crate::core::rng::{GameRng, GameRngState};
use crate::rules::PuzzleEngine;

/// One 15-puzzle game.
///
/// Intents are cell indices: tapping a tile next to the blank slides it.
#[derive(Clone, Debug)]
pub struct FifteenGame {
    config: FifteenConfig,
    board: Board,
    rng: GameRng,
    lifecycle: GameLifecycle<usize>,
}

impl FifteenGame {
    /// Start a game on a freshly shuffled, solvable board.
    #[instrument(skip(clock))]
    pub fn new(config: FifteenConfig, clock: &dyn Clock) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let board = Board::shuffled(&mut rng);
        info!(seed = rng.seed(), win_mode = %config.win_mode, "starting fifteen game");
        Self {
            config,
            board,
            rng,
            lifecycle: GameLifecycle::start(clock),
        }
    }

    /// Start a game on a given board. Later restarts shuffle as usual.
    pub fn with_board(config: FifteenConfig, board: Board, clock: &dyn Clock) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            config,
            board,
            rng,
            lifecycle: GameLifecycle::start(clock),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &FifteenConfig {
        &self.config
    }

    #[must_use]
    pub fn win_mode(&self) -> WinMode {
        self.config.win_mode
    }

    /// Switch the target arrangement. The board is left as it is.
    pub fn set_win_mode(&mut self, win_mode: WinMode) {
        debug!(%win_mode, "win mode changed");
        self.config.win_mode = win_mode;
    }

    /// Slide the tile at `cell` into the blank if they share an edge.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, cell: usize) -> Result<MoveOutcome> {
        let outcome = self.board.slide(cell)?;
        match outcome {
            MoveOutcome::Moved => {
                self.lifecycle.record(cell);
                debug!(moves = self.lifecycle.move_count(), "tile moved");
            }
            MoveOutcome::Rejected => {
                debug!(blank = self.board.blank_index(), "tile not adjacent to blank");
            }
        }
        Ok(outcome)
    }

    /// Whether the board matches the current win mode's target.
    #[must_use]
    pub fn check_win(&self) -> bool {
        self.board.matches(self.config.win_mode)
    }

    /// Whether the board matches the target for `mode`.
    #[must_use]
    pub fn check_win_for(&self, mode: WinMode) -> bool {
        self.board.matches(mode)
    }

    /// Target arrangement for the current win mode, for a solution overlay.
    #[must_use]
    pub fn target_permutation(&self) -> [u8; CELL_COUNT] {
        target_permutation(self.config.win_mode)
    }

    /// Time since the game started, as of `now`.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.lifecycle.elapsed(now)
    }

    /// Shuffle RNG position, for reproducing the next restart elsewhere.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl PuzzleEngine for FifteenGame {
    type Intent = usize;

    fn apply(&mut self, cell: usize) -> Result<MoveOutcome> {
        self.attempt_move(cell)
    }

    fn is_solved(&self) -> bool {
        self.check_win()
    }

    fn lifecycle(&self) -> &GameLifecycle<usize> {
        &self.lifecycle
    }

    /// Deal a new shuffled board from the game's RNG stream.
    fn restart(&mut self, clock: &dyn Clock) {
        self.board = Board::shuffled(&mut self.rng);
        self.lifecycle.restart(clock);
        info!(win_mode = %self.config.win_mode, "reshuffled fifteen game");
    }
}

//! Hanoi game session.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::towers::{Towers, TARGET_TOWER};
use crate::core::action::MoveOutcome;
use crate::core::clock::Clock;
use crate::core::config::{HanoiConfig, MAX_DISKS, MIN_DISKS};
use crate::core::error::{EngineError, Result};
use crate::core::lifecycle::GameLifecycle;
use crate::rules::PuzzleEngine;

/// A move of the top disk of `from` onto `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TowerMove {
    pub from: usize,
    pub to: usize,
}

impl TowerMove {
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Click-to-select, click-to-move interaction state.
///
/// `Idle` -> `Pending(tower)` -> `Idle`. The second click always returns to
/// `Idle`, whether or not the move it triggered was legal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Idle,
    /// A tower has been picked as the move source.
    Pending(usize),
}

impl Selection {
    #[must_use]
    pub fn pending(self) -> Option<usize> {
        match self {
            Selection::Idle => None,
            Selection::Pending(tower) => Some(tower),
        }
    }
}

/// What a tower or disk click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerClick {
    /// Tower picked as the move source.
    Selected(usize),
    /// Nothing happened (empty tower, or not the top disk).
    Ignored,
    /// A move was attempted from the pending tower.
    Attempted(MoveOutcome),
}

/// One Tower of Hanoi game.
///
/// Owns its towers, selection and move counter; every change goes through
/// `select_or_move`, `select_disk` or `move_disk`.
#[derive(Clone, Debug)]
pub struct HanoiGame {
    config: HanoiConfig,
    towers: Towers,
    selection: Selection,
    min_moves: u32,
    lifecycle: GameLifecycle<TowerMove>,
}

impl HanoiGame {
    /// Start a game: all disks on tower 0, no moves made.
    #[instrument(skip(clock))]
    pub fn start(config: HanoiConfig, clock: &dyn Clock) -> Self {
        info!(disk_count = config.disk_count(), "starting hanoi game");
        Self {
            config,
            towers: Towers::new(config.disk_count()),
            selection: Selection::Idle,
            min_moves: config.min_moves(),
            lifecycle: GameLifecycle::start(clock),
        }
    }

    /// Start a game from an arbitrary valid layout of 3 to 8 disks.
    pub fn from_towers(towers: Towers, clock: &dyn Clock) -> Result<Self> {
        let disk_count = towers.disk_count();
        if !(MIN_DISKS..=MAX_DISKS).contains(&disk_count) {
            return Err(EngineError::InvalidTowers(format!(
                "{disk_count} disks, expected {MIN_DISKS}..={MAX_DISKS}"
            )));
        }

        let config = HanoiConfig::new(disk_count);
        Ok(Self {
            config,
            towers,
            selection: Selection::Idle,
            min_moves: config.min_moves(),
            lifecycle: GameLifecycle::start(clock),
        })
    }

    /// Restart with a different number of disks.
    pub fn change_difficulty(&mut self, disk_count: usize, clock: &dyn Clock) {
        *self = Self::start(self.config.with_disk_count(disk_count), clock);
    }

    #[must_use]
    pub fn config(&self) -> &HanoiConfig {
        &self.config
    }

    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.config.disk_count()
    }

    #[must_use]
    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Fewest moves that solve this game.
    #[must_use]
    pub fn min_moves(&self) -> u32 {
        self.min_moves
    }

    /// Handle a click on a tower.
    ///
    /// With nothing selected, a non-empty tower becomes the move source and
    /// an empty one is ignored. With a source selected, the click attempts a
    /// move onto `tower` and the selection is cleared regardless of outcome.
    #[instrument(skip(self), fields(selection = ?self.selection))]
    pub fn select_or_move(&mut self, tower: usize) -> Result<TowerClick> {
        match std::mem::take(&mut self.selection) {
            Selection::Idle => {
                if self.towers.tower(tower)?.is_empty() {
                    return Ok(TowerClick::Ignored);
                }
                self.selection = Selection::Pending(tower);
                debug!(tower, "tower selected");
                Ok(TowerClick::Selected(tower))
            }
            Selection::Pending(from) => {
                let outcome = self.move_disk(from, tower)?;
                Ok(TowerClick::Attempted(outcome))
            }
        }
    }

    /// Handle a click on a disk. Only the top disk of a tower reacts.
    pub fn select_disk(&mut self, tower: usize, disk: usize) -> Result<TowerClick> {
        let height = self.towers.tower(tower)?.len();
        if disk >= height {
            return Err(EngineError::DiskOutOfRange {
                tower,
                disk,
                height,
            });
        }
        if disk + 1 != height {
            return Ok(TowerClick::Ignored);
        }
        self.select_or_move(tower)
    }

    /// Move the top disk of `from` onto `to`.
    ///
    /// Legal when `from` has a disk and `to` is empty or topped by a larger
    /// disk. Counts the move only when it happens.
    #[instrument(skip(self))]
    pub fn move_disk(&mut self, from: usize, to: usize) -> Result<MoveOutcome> {
        let outcome = self.towers.move_disk(from, to)?;
        match outcome {
            MoveOutcome::Moved => {
                self.lifecycle.record(TowerMove::new(from, to));
                debug!(moves = self.lifecycle.move_count(), "disk moved");
            }
            MoveOutcome::Rejected => debug!("move rejected"),
        }
        Ok(outcome)
    }

    /// Whether every disk sits on the target tower.
    #[must_use]
    pub fn check_win(&self) -> bool {
        self.towers.height(TARGET_TOWER) == self.disk_count()
    }

    /// Efficiency score: `round(100 * min_moves / max(moves, 1))`, in percent.
    ///
    /// Above 100 before the first move; display only.
    #[must_use]
    pub fn affinity(&self) -> u32 {
        let moves = self.lifecycle.move_count().max(1);
        let score = (100.0 * f64::from(self.min_moves) / f64::from(moves)).round();
        score.max(0.0) as u32
    }

    /// Time since the game started, as of `now`.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.lifecycle.elapsed(now)
    }
}

impl PuzzleEngine for HanoiGame {
    type Intent = TowerMove;

    fn apply(&mut self, intent: TowerMove) -> Result<MoveOutcome> {
        self.move_disk(intent.from, intent.to)
    }

    fn is_solved(&self) -> bool {
        self.check_win()
    }

    fn lifecycle(&self) -> &GameLifecycle<TowerMove> {
        &self.lifecycle
    }

    fn restart(&mut self, clock: &dyn Clock) {
        info!(disk_count = self.disk_count(), "restarting hanoi game");
        self.towers = Towers::new(self.disk_count());
        self.selection = Selection::Idle;
        self.min_moves = self.config.min_moves();
        self.lifecycle.restart(clock);
    }
}

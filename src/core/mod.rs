//! Core engine types: outcomes, lifecycle, clock, RNG, configuration, errors.
//!
//! This module holds the pieces both puzzles share. Game rules live in
//! `games`; nothing here knows about towers or tiles.

pub mod action;
pub mod clock;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod rng;

pub use action::{MoveOutcome, MoveRecord, Progress};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{FifteenConfig, HanoiConfig, WinMode, DEFAULT_DISKS, MAX_DISKS, MIN_DISKS};
pub use error::{EngineError, Result};
pub use lifecycle::GameLifecycle;
pub use rng::{GameRng, GameRngState};

//! Engine error type.
//!
//! Illegal moves are not errors: they come back as `MoveOutcome::Rejected`.
//! `EngineError` is reserved for caller contract violations such as an index
//! that no legitimate UI could produce.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("tower index {index} out of range (0..{count})")]
    TowerOutOfRange { index: usize, count: usize },

    #[error("disk index {disk} out of range for tower {tower} holding {height} disks")]
    DiskOutOfRange {
        tower: usize,
        disk: usize,
        height: usize,
    },

    #[error("cell index {index} out of range (0..{count})")]
    CellOutOfRange { index: usize, count: usize },

    #[error("invalid towers: {0}")]
    InvalidTowers(String),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("unknown win mode: {0:?}")]
    UnknownWinMode(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

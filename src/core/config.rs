//! Game configuration types.
//!
//! Hosts configure a game when starting or restarting it:
//! - `HanoiConfig`: number of disks (difficulty)
//! - `FifteenConfig`: win mode and optional shuffle seed
//!
//! Out-of-range disk counts are clamped, never rejected, whether they come
//! from code or from deserialized input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::EngineError;

/// Fewest disks a Hanoi game can have.
pub const MIN_DISKS: usize = 3;

/// Most disks a Hanoi game can have.
pub const MAX_DISKS: usize = 8;

/// Disk count used when none is given.
pub const DEFAULT_DISKS: usize = 4;

fn clamp_disk_count(disk_count: i64) -> u8 {
    disk_count.clamp(MIN_DISKS as i64, MAX_DISKS as i64) as u8
}

fn deserialize_disk_count<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(clamp_disk_count(raw))
}

/// Tower of Hanoi configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HanoiConfig {
    #[serde(deserialize_with = "deserialize_disk_count")]
    disk_count: u8,
}

impl HanoiConfig {
    /// Create a configuration, clamping `disk_count` to `MIN_DISKS..=MAX_DISKS`.
    #[must_use]
    pub fn new(disk_count: usize) -> Self {
        Self {
            disk_count: clamp_disk_count(disk_count.min(i64::MAX as usize) as i64),
        }
    }

    /// Same configuration with a different (clamped) disk count.
    #[must_use]
    pub fn with_disk_count(self, disk_count: usize) -> Self {
        Self::new(disk_count)
    }

    #[must_use]
    pub fn disk_count(&self) -> usize {
        usize::from(self.disk_count)
    }

    /// Fewest moves that solve this configuration: 2^n - 1.
    #[must_use]
    pub fn min_moves(&self) -> u32 {
        (1u32 << self.disk_count) - 1
    }
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DISKS)
    }
}

/// Target arrangement family for the 15-puzzle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WinMode {
    /// 1..15 in reading order, blank last.
    #[default]
    Normal,
    /// Blank first, then 15 down to 1.
    #[serde(alias = "inverso")]
    Reversed,
    /// 1..15 laid out column by column.
    #[serde(alias = "vertical")]
    ColumnMajor,
    /// Odd numbers then even numbers, in two-row bands.
    #[serde(alias = "skip")]
    SkipPattern,
}

impl WinMode {
    pub const ALL: [WinMode; 4] = [
        WinMode::Normal,
        WinMode::Reversed,
        WinMode::ColumnMajor,
        WinMode::SkipPattern,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            WinMode::Normal => "normal",
            WinMode::Reversed => "reversed",
            WinMode::ColumnMajor => "columnMajor",
            WinMode::SkipPattern => "skipPattern",
        }
    }
}

impl fmt::Display for WinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WinMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(WinMode::Normal),
            "reversed" | "inverso" => Ok(WinMode::Reversed),
            "columnMajor" | "vertical" => Ok(WinMode::ColumnMajor),
            "skipPattern" | "skip" => Ok(WinMode::SkipPattern),
            other => Err(EngineError::UnknownWinMode(other.to_string())),
        }
    }
}

/// 15-puzzle configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FifteenConfig {
    /// Arrangement that counts as solved.
    pub win_mode: WinMode,

    /// Shuffle seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl FifteenConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_win_mode(mut self, win_mode: WinMode) -> Self {
        self.win_mode = win_mode;
        self
    }

    /// Fix the shuffle seed for reproducible boards.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

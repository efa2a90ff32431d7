//! Tower stacks for the Hanoi puzzle.
//!
//! Each tower is stored bottom to top, so the last element is the top disk.
//! The only mutation is `move_disk`, which places a disk either on an empty
//! tower or on a strictly larger one; every reachable layout therefore keeps
//! each tower strictly decreasing from bottom to top.

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::action::MoveOutcome;
use crate::core::config::MAX_DISKS;
use crate::core::error::{EngineError, Result};

/// Number of towers.
pub const TOWER_COUNT: usize = 3;

/// The tower all disks must reach.
pub const TARGET_TOWER: usize = 2;

/// One tower, bottom to top. Never spills to the heap.
pub type Tower = SmallVec<[u8; MAX_DISKS]>;

/// The three towers of a Hanoi game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Towers {
    stacks: [Tower; TOWER_COUNT],
}

impl Towers {
    /// Starting layout: disks `disk_count..=1` on tower 0, largest at the bottom.
    #[must_use]
    pub fn new(disk_count: usize) -> Self {
        let first: Tower = (1..=disk_count as u8).rev().collect();
        Self {
            stacks: [first, Tower::new(), Tower::new()],
        }
    }

    /// Build towers from explicit bottom-to-top stacks.
    ///
    /// Fails unless every stack is strictly decreasing upward and the stacks
    /// together hold each of `1..=n` exactly once.
    pub fn from_stacks(stacks: [&[u8]; TOWER_COUNT]) -> Result<Self> {
        let total: usize = stacks.iter().map(|s| s.len()).sum();
        if total > MAX_DISKS {
            return Err(EngineError::InvalidTowers(format!(
                "{total} disks exceeds the maximum of {MAX_DISKS}"
            )));
        }

        let mut seen = [false; MAX_DISKS + 1];
        for (index, stack) in stacks.iter().enumerate() {
            if stack.windows(2).any(|pair| pair[0] <= pair[1]) {
                return Err(EngineError::InvalidTowers(format!(
                    "tower {index} has a disk on top of a smaller one"
                )));
            }
            for &disk in *stack {
                let slot = usize::from(disk);
                if slot == 0 || slot > total || seen[slot] {
                    return Err(EngineError::InvalidTowers(format!(
                        "disks must be 1..={total} each exactly once, found {disk}"
                    )));
                }
                seen[slot] = true;
            }
        }

        Ok(Self {
            stacks: stacks.map(Tower::from_slice),
        })
    }

    /// Disks on `index`, bottom to top.
    pub fn tower(&self, index: usize) -> Result<&[u8]> {
        self.stacks
            .get(index)
            .map(|s| s.as_slice())
            .ok_or(EngineError::TowerOutOfRange {
                index,
                count: TOWER_COUNT,
            })
    }

    /// Top (smallest) disk of `index`, if any.
    #[must_use]
    pub fn top(&self, index: usize) -> Option<u8> {
        self.stacks.get(index).and_then(|s| s.last().copied())
    }

    /// Number of disks on `index` (0 for an unknown tower).
    #[must_use]
    pub fn height(&self, index: usize) -> usize {
        self.stacks.get(index).map_or(0, |s| s.len())
    }

    /// Total disks across all towers.
    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.stacks.iter().map(|s| s.len()).sum()
    }

    /// Whether the top disk of `from` may go onto `to`.
    #[must_use]
    pub fn can_move(&self, from: usize, to: usize) -> bool {
        match (self.top(from), self.stacks.get(to)) {
            (Some(disk), Some(target)) => target.last().map_or(true, |&top| disk < top),
            _ => false,
        }
    }

    /// Move the top disk of `from` onto `to` if legal.
    pub fn move_disk(&mut self, from: usize, to: usize) -> Result<MoveOutcome> {
        for index in [from, to] {
            if index >= TOWER_COUNT {
                return Err(EngineError::TowerOutOfRange {
                    index,
                    count: TOWER_COUNT,
                });
            }
        }

        if !self.can_move(from, to) {
            return Ok(MoveOutcome::Rejected);
        }

        if let Some(disk) = self.stacks[from].pop() {
            self.stacks[to].push(disk);
        }
        Ok(MoveOutcome::Moved)
    }

    /// Whether each tower is strictly decreasing bottom to top and the disks
    /// are exactly `1..=disk_count`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        Self::from_stacks([
            self.stacks[0].as_slice(),
            self.stacks[1].as_slice(),
            self.stacks[2].as_slice(),
        ])
        .is_ok()
    }

    /// Iterate over towers in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.stacks.iter().map(|s| s.as_slice())
    }

    /// Towers as plain vectors, bottom to top.
    #[must_use]
    pub fn to_vecs(&self) -> Vec<Vec<u8>> {
        self.iter().map(<[u8]>::to_vec).collect()
    }
}

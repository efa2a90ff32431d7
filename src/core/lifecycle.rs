//! Shared game lifecycle: move counter, start timestamp, move history.
//!
//! Both engines embed one `GameLifecycle`. The counter only ever increases
//! during a game and drops back to zero on restart, together with the start
//! timestamp and the history.

use std::time::{Duration, Instant};

use super::action::MoveRecord;
use super::clock::Clock;

#[derive(Clone, Debug)]
pub struct GameLifecycle<I> {
    move_count: u32,
    started_at: Instant,
    history: Vec<MoveRecord<I>>,
}

impl<I> GameLifecycle<I> {
    /// Begin a game at the clock's current instant.
    pub fn start(clock: &(impl Clock + ?Sized)) -> Self {
        Self {
            move_count: 0,
            started_at: clock.now(),
            history: Vec::new(),
        }
    }

    /// Reset counter, history and start timestamp.
    pub fn restart(&mut self, clock: &(impl Clock + ?Sized)) {
        self.move_count = 0;
        self.started_at = clock.now();
        self.history.clear();
    }

    /// Count an accepted move and append it to the history.
    pub fn record(&mut self, intent: I) {
        self.move_count += 1;
        self.history.push(MoveRecord::new(self.move_count, intent));
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Time since the game started, as of `now`. Zero if `now` is earlier.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Accepted moves in order.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord<I>] {
        &self.history
    }
}

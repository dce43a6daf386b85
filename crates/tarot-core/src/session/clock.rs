//! Session time and generation-scoped timers.
//!
//! The clock only moves when the driver advances it, so the controller stays
//! deterministic under test. Timers are never cancelled: each carries the
//! session generation it was scheduled in, and the controller drops the ones
//! whose generation is no longer current when they come due.

use std::time::Duration;

/// Monotonic session time, advanced by the driver.
#[derive(Debug, Clone, Default)]
pub struct SessionClock {
    elapsed: Duration,
}

impl SessionClock {
    /// A clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward. Returns the new time.
    pub fn advance(&mut self, by: Duration) -> Duration {
        self.elapsed += by;
        self.elapsed
    }

    /// Time elapsed since the clock started.
    pub fn now(&self) -> Duration {
        self.elapsed
    }
}

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Turn the drawn cards face up.
    RevealCards,
    /// Show the interpretation text.
    ShowText,
    /// Start fading the fog.
    FadeFog,
    /// Remove the fog.
    ClearFog,
}

/// A pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    /// Session time at which it fires.
    pub due: Duration,
    /// Session generation it belongs to.
    pub generation: u64,
    /// Its effect.
    pub kind: TimerKind,
}

/// Pending timers ordered by due time; equal due times fire in scheduling order.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
}

impl TimerQueue {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a timer.
    pub fn schedule(&mut self, timer: Timer) {
        let at = self.timers.partition_point(|t| t.due <= timer.due);
        self.timers.insert(at, timer);
    }

    /// Remove and return every timer due at or before `now`, in firing order.
    pub fn pop_due(&mut self, now: Duration) -> Vec<Timer> {
        let due = self.timers.partition_point(|t| t.due <= now);
        self.timers.drain(..due).collect()
    }

    /// Due time of the earliest pending timer of a generation.
    pub fn next_due(&self, generation: u64) -> Option<Duration> {
        self.timers
            .iter()
            .find(|t| t.generation == generation)
            .map(|t| t.due)
    }

    /// Number of pending timers, stale ones included.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

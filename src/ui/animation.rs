//! Decorative color cycle for the keypad
//!
//! The cycle is a counter advanced on a fixed interval. It is driven by the
//! event loop's clock and never reads or writes calculator state.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ColorCycle {
    seed: u64,
    interval: Duration,
    last_tick: Instant,
    enabled: bool,
}

impl ColorCycle {
    pub fn new(interval: Duration, enabled: bool) -> Self {
        ColorCycle {
            seed: 0,
            interval: interval.max(Duration::from_millis(1)),
            last_tick: Instant::now(),
            enabled,
        }
    }

    /// Current color seed
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advance once per elapsed interval up to `now`.
    ///
    /// Returns whether the seed changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }

        let mut advanced = false;
        while now.saturating_duration_since(self.last_tick) >= self.interval {
            self.seed = self.seed.wrapping_add(1);
            self.last_tick += self.interval;
            advanced = true;
        }
        advanced
    }

    /// Time left until the next tick is due
    pub fn until_next(&self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.interval.saturating_sub(elapsed)
    }
}

//! Turns host timestamps into per-tick deltas.

use swarm_core::constants::CLOCK_SENTINEL;

/// Tracks the previous host timestamp (milliseconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    last: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::with_baseline(CLOCK_SENTINEL)
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_baseline(baseline: f64) -> Self {
        Self { last: baseline }
    }

    /// Elapsed time since the previous call, never negative. A timestamp at
    /// or before the baseline yields zero.
    pub fn delta(&mut self, timestamp: f64) -> f64 {
        let delta = (timestamp - self.last).max(0.0);
        self.last = self.last.max(timestamp);
        delta
    }

    pub fn last(&self) -> f64 {
        self.last
    }
}

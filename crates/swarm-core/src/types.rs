//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

pub use glam::DVec2;

/// Axis-aligned rectangle in surface pixels. Origin is the top-left corner,
/// y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at `origin` with the given `size`.
    pub fn from_origin_size(origin: DVec2, size: DVec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }
}

/// Opaque reference to a sprite sheet the host resolved before the engine
/// started. The engine never dereferences it; it is handed back to the
/// draw sink unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteHandle(pub u32);

/// Half-open `[min, max)` range a random quantity is drawn from at spawn.
/// `min == max` pins the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both ends finite and ordered.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Map a unit sample in `[0, 1)` onto the range.
    pub fn lerp(&self, unit: f64) -> f64 {
        self.min + unit * (self.max - self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        if self.min == self.max {
            return value == self.min;
        }
        value >= self.min && value < self.max
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed ticks.
    pub tick: u64,
    /// Sum of every delta fed to the world, in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one tick of `delta` milliseconds.
    pub fn advance(&mut self, delta: f64) {
        self.tick += 1;
        self.elapsed_ms += delta;
    }
}

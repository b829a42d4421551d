//! Sprite sheets and the frame cycle that walks them.

use swarm_core::config::VariantConfig;
use swarm_core::types::{Rect, SpriteHandle};

/// A single-row sprite sheet owned by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSheet {
    pub handle: SpriteHandle,
    pub frame_width: f64,
    pub frame_height: f64,
}

impl SpriteSheet {
    pub fn from_config(config: &VariantConfig) -> Self {
        Self {
            handle: config.sprite,
            frame_width: config.frame_width,
            frame_height: config.frame_height,
        }
    }

    /// Source rectangle of column `index`.
    pub fn frame_rect(&self, index: u32) -> Rect {
        Rect::new(
            index as f64 * self.frame_width,
            0.0,
            self.frame_width,
            self.frame_height,
        )
    }
}

/// Animation state: which column is shown and for how long it has been.
///
/// The timer accumulates every tick; once it strictly exceeds the interval
/// the index steps forward (wrapping past `max_frame`) and the timer resets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCycle {
    index: u32,
    max_frame: u32,
    interval: f64,
    timer: f64,
}

impl FrameCycle {
    pub fn new(max_frame: u32, interval: f64) -> Self {
        Self {
            index: 0,
            max_frame,
            interval,
            timer: 0.0,
        }
    }

    pub fn from_config(config: &VariantConfig) -> Self {
        Self::new(config.max_frame(), config.frame_interval)
    }

    pub fn advance(&mut self, delta: f64) {
        self.timer += delta;
        if self.timer > self.interval {
            self.index = if self.index < self.max_frame {
                self.index + 1
            } else {
                0
            };
            self.timer = 0.0;
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn max_frame(&self) -> u32 {
        self.max_frame
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn timer(&self) -> f64 {
        self.timer
    }
}

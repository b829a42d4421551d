//! Simulation constants and tuning defaults.
//!
//! Times are milliseconds, distances are surface pixels, speeds are pixels
//! per millisecond.

use crate::types::ValueRange;

// --- Surface ---

/// Default surface width.
pub const SURFACE_WIDTH: f64 = 500.0;

/// Default surface height.
pub const SURFACE_HEIGHT: f64 = 800.0;

// --- Clock ---

/// Baseline timestamp before the first frame. Keeps the first delta from
/// being measured against zero.
pub const CLOCK_SENTINEL: f64 = 1.0;

/// Nominal host frame period used by headless drivers (60 Hz).
pub const FRAME_PERIOD_MS: f64 = 1000.0 / 60.0;

// --- Spawning ---

/// Default time between spawns.
pub const SPAWN_INTERVAL: f64 = 500.0;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Animation ---

/// Columns per sprite sheet (all sheets share one row).
pub const SPRITE_COLUMNS: u32 = 6;

/// Time each sprite frame stays on screen.
pub const FRAME_INTERVAL: f64 = 100.0;

// --- Ground crawler ---

pub const CRAWLER_FRAME_WIDTH: f64 = 229.0;
pub const CRAWLER_FRAME_HEIGHT: f64 = 171.0;
pub const CRAWLER_SCALE: f64 = 0.5;
pub const CRAWLER_SPEED: ValueRange = ValueRange::new(0.1, 0.2);

// --- Dropper ---

pub const DROPPER_FRAME_WIDTH: f64 = 310.0;
pub const DROPPER_FRAME_HEIGHT: f64 = 175.0;
pub const DROPPER_SCALE: f64 = 0.35;
/// Droppers hang in place horizontally.
pub const DROPPER_SPEED: ValueRange = ValueRange::new(0.0, 0.0);
/// Vertical speed on the thread.
pub const DROPPER_FALL_SPEED: ValueRange = ValueRange::new(0.1, 0.2);

// --- Floater ---

pub const FLOATER_FRAME_WIDTH: f64 = 261.0;
pub const FLOATER_FRAME_HEIGHT: f64 = 209.0;
pub const FLOATER_SCALE: f64 = 0.5;
pub const FLOATER_SPEED: ValueRange = ValueRange::new(0.1, 0.3);
/// Per-tick vertical bias added on top of the sine wobble.
pub const FLOATER_CURVE: ValueRange = ValueRange::new(0.0, 3.0);
/// Phase advance per tick (radians).
pub const FLOATER_PHASE_STEP: f64 = 0.04;
/// Draw opacity for floaters.
pub const FLOATER_ALPHA: f64 = 0.5;

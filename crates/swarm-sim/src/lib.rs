//! Simulation engine for SWARM.
//!
//! Owns the enemy collection, runs the spawn/advance/purge cycle once per
//! tick and issues draw calls against a host-provided sink. Completely
//! headless, so every behaviour can be driven from tests with a seeded RNG.

pub mod canvas;
pub mod clock;
pub mod driver;
pub mod enemy;
pub mod engine;
pub mod sprite;
pub mod systems;

pub use swarm_core as core;
pub use canvas::{CommandRecorder, DrawCommand, DrawSink};
pub use clock::FrameClock;
pub use driver::FrameDriver;
pub use engine::World;

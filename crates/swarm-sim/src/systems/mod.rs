//! Per-tick systems operating on the enemy collection.
//!
//! Systems are plain functions over the pieces of world state they touch.
//! They own no state of their own except the spawn scheduler's timer.

pub mod cleanup;
pub mod movement;
pub mod render;
pub mod snapshot;
pub mod spawner;

//! World state snapshot: the visible state handed to hosts after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;
use crate::types::SimTime;

/// Complete world state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    /// Time accumulated towards the next spawn.
    pub spawn_timer: f64,
    /// Enemies in spawn order, including any that expired this tick.
    pub enemies: Vec<EnemyView>,
}

impl WorldSnapshot {
    /// Enemies that will still be drawn.
    pub fn live(&self) -> impl Iterator<Item = &EnemyView> {
        self.enemies.iter().filter(|e| !e.expired)
    }
}

/// One enemy as the host sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub kind: EnemyKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub frame_index: u32,
    pub expired: bool,
}

//! Builds the host-facing snapshot from world state.

use swarm_core::state::WorldSnapshot;
use swarm_core::types::SimTime;

use crate::enemy::Enemy;

pub fn build_snapshot(time: &SimTime, spawn_timer: f64, enemies: &[Enemy]) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        spawn_timer,
        enemies: enemies.iter().map(Enemy::view).collect(),
    }
}

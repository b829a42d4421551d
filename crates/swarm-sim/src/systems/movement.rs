//! Advances every enemy by the tick's delta.

use crate::enemy::Enemy;

/// Advance `enemies` in order, all with the same `delta`.
pub fn run(enemies: &mut [Enemy], delta: f64) {
    for enemy in enemies {
        enemy.advance(delta);
    }
}

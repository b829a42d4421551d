//! Render binding: draws live enemies in spawn order.

use crate::canvas::DrawSink;
use crate::enemy::Enemy;

/// Draw every enemy that has not expired. Later spawns draw on top.
pub fn run<S: DrawSink + ?Sized>(enemies: &[Enemy], sink: &mut S) {
    for enemy in enemies.iter().filter(|e| !e.is_expired()) {
        enemy.render(sink);
    }
}

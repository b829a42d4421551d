//! Cleanup system: drops enemies that expired on an earlier tick.

use tracing::debug;

use crate::enemy::Enemy;

/// Remove expired enemies, keeping spawn order. Returns how many were removed.
pub fn run(enemies: &mut Vec<Enemy>) -> usize {
    let before = enemies.len();
    enemies.retain(|enemy| !enemy.is_expired());
    let removed = before - enemies.len();
    if removed > 0 {
        debug!(removed, remaining = enemies.len(), "purged expired enemies");
    }
    removed
}

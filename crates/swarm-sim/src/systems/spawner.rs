//! Spawn scheduling. Emits one enemy each time the interval is exceeded.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use swarm_core::config::WorldConfig;
use swarm_core::enums::EnemyKind;

use crate::enemy::Enemy;

/// Accumulates elapsed time and decides when and what to spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnScheduler {
    interval: f64,
    timer: f64,
    variants: Vec<EnemyKind>,
}

impl SpawnScheduler {
    pub fn new(interval: f64, variants: Vec<EnemyKind>) -> Self {
        Self {
            interval,
            timer: 0.0,
            variants,
        }
    }

    pub fn from_config(config: &WorldConfig) -> Self {
        Self::new(config.spawn_interval, config.variants.clone())
    }

    /// Add `delta` to the timer. When the timer strictly exceeds the
    /// interval it resets to zero and a variant is picked uniformly.
    pub fn poll<R: Rng + ?Sized>(&mut self, delta: f64, rng: &mut R) -> Option<EnemyKind> {
        self.timer += delta;
        if self.timer > self.interval {
            self.timer = 0.0;
            self.variants.choose(rng).copied()
        } else {
            None
        }
    }

    pub fn timer(&self) -> f64 {
        self.timer
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn variants(&self) -> &[EnemyKind] {
        &self.variants
    }
}

/// Poll the scheduler and append any new enemy. Returns the new enemy's id.
pub fn run<R: Rng + ?Sized>(
    scheduler: &mut SpawnScheduler,
    enemies: &mut Vec<Enemy>,
    next_id: &mut u64,
    config: &WorldConfig,
    rng: &mut R,
    delta: f64,
) -> Option<u64> {
    let kind = scheduler.poll(delta, rng)?;

    let id = *next_id;
    *next_id += 1;
    let enemy = Enemy::spawn(id, kind, config, rng);
    debug!(
        id,
        %kind,
        x = enemy.position().x,
        y = enemy.position().y,
        count = enemies.len() + 1,
        "enemy spawned"
    );
    enemies.push(enemy);
    Some(id)
}

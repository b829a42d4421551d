//! The world. Owns the enemies and runs one tick at a time.
//!
//! Tick order is fixed: purge enemies that expired last tick, poll the spawn
//! scheduler, then advance every enemy that existed before the spawn check.
//! An enemy spawned this tick starts moving on the next one. Rendering is a
//! separate call so hosts can draw after updating.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace};

use swarm_core::config::WorldConfig;
use swarm_core::error::ConfigError;
use swarm_core::state::WorldSnapshot;
use swarm_core::types::{DVec2, SimTime};

use crate::canvas::DrawSink;
use crate::enemy::Enemy;
use crate::systems;
use crate::systems::spawner::SpawnScheduler;

pub struct World<R = ChaCha8Rng> {
    config: WorldConfig,
    enemies: Vec<Enemy>,
    scheduler: SpawnScheduler,
    time: SimTime,
    next_id: u64,
    rng: R,
}

impl World<ChaCha8Rng> {
    /// Build a world whose RNG is seeded from `config.seed`.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> World<R> {
    /// Build a world drawing spawn-time randomness from `rng`.
    pub fn with_rng(config: WorldConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            width = config.width,
            height = config.height,
            spawn_interval = config.spawn_interval,
            variants = ?config.variants,
            "world created"
        );
        Ok(Self {
            scheduler: SpawnScheduler::from_config(&config),
            config,
            enemies: Vec::new(),
            time: SimTime::default(),
            next_id: 0,
            rng,
        })
    }

    /// Run one tick with `delta` milliseconds. Negative or NaN deltas count
    /// as zero.
    pub fn update(&mut self, delta: f64) {
        let delta = delta.max(0.0);

        systems::cleanup::run(&mut self.enemies);

        let advancing = self.enemies.len();
        systems::spawner::run(
            &mut self.scheduler,
            &mut self.enemies,
            &mut self.next_id,
            &self.config,
            &mut self.rng,
            delta,
        );

        systems::movement::run(&mut self.enemies[..advancing], delta);
        self.time.advance(delta);
        trace!(tick = self.time.tick, delta, enemies = self.enemies.len(), "tick");
    }

    /// Draw every live enemy onto `sink` in spawn order.
    pub fn render<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        systems::render::run(&self.enemies, sink);
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build_snapshot(&self.time, self.scheduler.timer(), &self.enemies)
    }

    /// Enemies in spawn order, including any that expired this tick.
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn live_count(&self) -> usize {
        self.enemies.iter().filter(|e| !e.is_expired()).count()
    }

    pub fn spawn_timer(&self) -> f64 {
        self.scheduler.timer()
    }

    pub fn spawn_interval(&self) -> f64 {
        self.scheduler.interval()
    }

    /// Surface width and height.
    pub fn bounds(&self) -> DVec2 {
        DVec2::new(self.config.width, self.config.height)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Place an enemy directly, bypassing the scheduler (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, kind: swarm_core::enums::EnemyKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.enemies
            .push(Enemy::spawn(id, kind, &self.config, &mut self.rng));
        id
    }
}

//! Enemies: shared kinematic/animation state plus a per-variant motion.
//!
//! `advance` always runs the shared step (leftward drift, off-left expiry,
//! frame cycle) and then the variant step.

use rand::Rng;

use swarm_core::config::WorldConfig;
use swarm_core::enums::EnemyKind;
use swarm_core::state::EnemyView;
use swarm_core::types::{DVec2, Rect, ValueRange};

use crate::canvas::DrawSink;
use crate::sprite::{FrameCycle, SpriteSheet};

/// Variant-specific state. Randomised fields are drawn once at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    GroundCrawler,
    Dropper {
        /// Positive while descending.
        velocity_y: f64,
        /// Depth at which the descent reflects upward.
        max_drop: f64,
    },
    Floater {
        phase: f64,
        phase_step: f64,
        /// Constant vertical bias added every tick.
        curve: f64,
        alpha: f64,
    },
}

impl Motion {
    pub fn kind(&self) -> EnemyKind {
        match self {
            Motion::GroundCrawler => EnemyKind::GroundCrawler,
            Motion::Dropper { .. } => EnemyKind::Dropper,
            Motion::Floater { .. } => EnemyKind::Floater,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    id: u64,
    position: DVec2,
    size: DVec2,
    velocity_x: f64,
    sheet: SpriteSheet,
    frames: FrameCycle,
    motion: Motion,
    expired: bool,
}

/// Draw a value from `range`.
fn sample<R: Rng + ?Sized>(rng: &mut R, range: ValueRange) -> f64 {
    range.lerp(rng.gen::<f64>())
}

impl Enemy {
    /// Build a freshly spawned enemy of `kind` just outside the surface.
    pub(crate) fn spawn<R: Rng + ?Sized>(
        id: u64,
        kind: EnemyKind,
        config: &WorldConfig,
        rng: &mut R,
    ) -> Self {
        let variant = config.variant(kind);
        let size = variant.size();
        let velocity_x = sample(rng, variant.speed);

        let (position, motion) = match kind {
            EnemyKind::GroundCrawler => (
                DVec2::new(config.width, config.height - size.y),
                Motion::GroundCrawler,
            ),
            EnemyKind::Dropper => {
                let x = rng.gen::<f64>() * config.width;
                let velocity_y = sample(rng, config.dropper_motion.fall_speed);
                let max_drop = rng.gen::<f64>() * config.height;
                (
                    DVec2::new(x, -size.y),
                    Motion::Dropper {
                        velocity_y,
                        max_drop,
                    },
                )
            }
            EnemyKind::Floater => {
                let tuning = &config.floater_motion;
                let y = rng.gen::<f64>() * config.height * 0.5;
                let curve = sample(rng, tuning.curve);
                (
                    DVec2::new(config.width, y),
                    Motion::Floater {
                        phase: 0.0,
                        phase_step: tuning.phase_step,
                        curve,
                        alpha: tuning.alpha,
                    },
                )
            }
        };

        Self {
            id,
            position,
            size,
            velocity_x,
            sheet: SpriteSheet::from_config(variant),
            frames: FrameCycle::from_config(variant),
            motion,
            expired: false,
        }
    }

    /// Step by `delta` milliseconds. Does nothing once expired.
    pub fn advance(&mut self, delta: f64) {
        if self.expired {
            return;
        }

        self.position.x -= self.velocity_x * delta;
        if self.position.x < -self.size.x {
            self.expired = true;
        }
        self.frames.advance(delta);

        match &mut self.motion {
            Motion::GroundCrawler => {}
            Motion::Dropper {
                velocity_y,
                max_drop,
            } => {
                self.position.y += *velocity_y * delta;
                if *velocity_y > 0.0 && self.position.y > *max_drop {
                    *velocity_y = -*velocity_y;
                }
                if self.position.y < -self.size.y * 2.0 {
                    self.expired = true;
                }
            }
            Motion::Floater {
                phase,
                phase_step,
                curve,
                ..
            } => {
                self.position.y += phase.sin() + *curve;
                *phase += *phase_step;
            }
        }
    }

    /// Issue this enemy's draw calls. Any state override is restored before
    /// returning.
    pub fn render<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        let src = self.sheet.frame_rect(self.frames.index());
        let dst = Rect::from_origin_size(self.position, self.size);

        match self.motion {
            Motion::GroundCrawler => sink.draw_sprite(self.sheet.handle, src, dst),
            Motion::Dropper { .. } => {
                let center_x = self.position.x + self.size.x / 2.0;
                sink.stroke_line(
                    DVec2::new(center_x, 0.0),
                    DVec2::new(center_x, self.position.y + self.size.y / 2.0),
                );
                sink.draw_sprite(self.sheet.handle, src, dst);
            }
            Motion::Floater { alpha, .. } => {
                sink.save();
                sink.set_global_alpha(alpha);
                sink.draw_sprite(self.sheet.handle, src, dst);
                sink.restore();
            }
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> EnemyKind {
        self.motion.kind()
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    pub fn velocity_x(&self) -> f64 {
        self.velocity_x
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn frames(&self) -> &FrameCycle {
        &self.frames
    }

    pub fn view(&self) -> EnemyView {
        EnemyView {
            id: self.id,
            kind: self.kind(),
            x: self.position.x,
            y: self.position.y,
            width: self.size.x,
            height: self.size.y,
            frame_index: self.frames.index(),
            expired: self.expired,
        }
    }
}

//! Couples the clock adapter, the world and a draw sink into the host's
//! per-frame callback.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use swarm_core::types::Rect;

use crate::canvas::DrawSink;
use crate::clock::FrameClock;
use crate::engine::World;

pub struct FrameDriver<R = ChaCha8Rng> {
    clock: FrameClock,
    world: World<R>,
}

impl<R: Rng> FrameDriver<R> {
    pub fn new(world: World<R>) -> Self {
        Self {
            clock: FrameClock::new(),
            world,
        }
    }

    /// Handle one host frame: clear the surface, update with the elapsed
    /// time since the previous frame, draw. Returns the delta used.
    pub fn frame<S: DrawSink + ?Sized>(&mut self, timestamp: f64, sink: &mut S) -> f64 {
        let bounds = self.world.bounds();
        sink.clear_rect(Rect::new(0.0, 0.0, bounds.x, bounds.y));

        let delta = self.clock.delta(timestamp);
        self.world.update(delta);
        self.world.render(sink);
        delta
    }

    pub fn world(&self) -> &World<R> {
        &self.world
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}

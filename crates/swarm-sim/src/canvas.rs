//! The drawing contract between the engine and the host surface.

use serde::{Deserialize, Serialize};

use swarm_core::types::{DVec2, Rect, SpriteHandle};

/// A 2D surface the engine can draw onto.
///
/// Mirrors an immediate-mode canvas: `save`/`restore` push and pop the
/// drawing state (here only the global alpha), and a `restore` with nothing
/// saved is ignored.
pub trait DrawSink {
    /// Clear a rectangular region to transparent.
    fn clear_rect(&mut self, rect: Rect);
    /// Blit the `src` sub-rectangle of `sprite` into `dst`.
    fn draw_sprite(&mut self, sprite: SpriteHandle, src: Rect, dst: Rect);
    /// Stroke a straight line. Leaves the current path empty.
    fn stroke_line(&mut self, from: DVec2, to: DVec2);
    fn save(&mut self);
    fn restore(&mut self);
    fn set_global_alpha(&mut self, alpha: f64);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawCommand {
    Clear {
        rect: Rect,
    },
    Sprite {
        sprite: SpriteHandle,
        src: Rect,
        dst: Rect,
        /// Global alpha in effect when the blit was issued.
        alpha: f64,
    },
    Line {
        from: DVec2,
        to: DVec2,
    },
    Save,
    Restore,
    SetAlpha {
        alpha: f64,
    },
}

/// A sink that records every call and tracks the state stack, for headless
/// hosts and tests.
#[derive(Debug, Clone)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    alpha: f64,
    saved: Vec<f64>,
}

impl Default for CommandRecorder {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            alpha: 1.0,
            saved: Vec::new(),
        }
    }
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands, keeping the drawing state.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current global alpha.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Number of unmatched `save` calls.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// True when no state override is outstanding.
    pub fn is_balanced(&self) -> bool {
        self.saved.is_empty() && self.alpha == 1.0
    }

    pub fn sprite_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count()
    }
}

impl DrawSink for CommandRecorder {
    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear { rect });
    }

    fn draw_sprite(&mut self, sprite: SpriteHandle, src: Rect, dst: Rect) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            src,
            dst,
            alpha: self.alpha,
        });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn save(&mut self) {
        self.saved.push(self.alpha);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(alpha) = self.saved.pop() {
            self.alpha = alpha;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
        self.commands.push(DrawCommand::SetAlpha { alpha });
    }
}

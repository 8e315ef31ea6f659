//! Platform abstraction layer
//!
//! What the simulation needs from its host, and nothing more:
//! - Time/ticks (`time`)
//! - Input events (`input`)
//! - Viewport size and a sink for draw descriptors

pub mod input;
pub mod time;

pub use input::{Action, InputEvent, Key};
pub use time::Clock;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Backdrop, Bounds, DrawDescriptor, Hud};

/// Current canvas size as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        Bounds::from(*self).contains(pos)
    }
}

impl From<Viewport> for Bounds {
    fn from(viewport: Viewport) -> Self {
        Bounds::new(viewport.width, viewport.height)
    }
}

/// Receives one frame of drawables per draw tick. Rendering, asset lookup
/// and caching are entirely the implementor's business.
pub trait PresentationSink {
    fn begin_frame(&mut self, _viewport: Viewport) {}
    fn draw_backdrop(&mut self, backdrop: &Backdrop);
    fn draw_sprite(&mut self, sprite: &DrawDescriptor);
    fn draw_hud(&mut self, hud: &Hud);
    fn end_frame(&mut self) {}
}

/// Keeps the last frame in memory; used by headless hosts and tests
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pub backdrop: Option<Backdrop>,
    pub sprites: Vec<DrawDescriptor>,
    pub hud: Option<Hud>,
    pub frames: u64,
}

impl PresentationSink for FrameRecorder {
    fn begin_frame(&mut self, _viewport: Viewport) {
        self.backdrop = None;
        self.sprites.clear();
        self.hud = None;
    }

    fn draw_backdrop(&mut self, backdrop: &Backdrop) {
        self.backdrop = Some(*backdrop);
    }

    fn draw_sprite(&mut self, sprite: &DrawDescriptor) {
        self.sprites.push(*sprite);
    }

    fn draw_hud(&mut self, hud: &Hud) {
        self.hud = Some(*hud);
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

//! Background layers and heads-up display snapshots
//!
//! Pure data for the presentation layer: where the nebula and debris layers
//! sit this frame, and what the HUD should say.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematics::Bounds;
use super::state::GameState;
use crate::consts::{DEBRIS_SCROLL_DIVISOR, HUD_FONT_SIZE, HUD_GUTTER};

/// Placement of the two background layers for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Backdrop {
    /// Static nebula, stretched over the whole field
    pub nebula_center: Vec2,
    pub nebula_size: Vec2,
    /// Debris drawn twice side by side so the horizontal scroll wraps seamlessly
    pub debris_centers: [Vec2; 2],
    pub debris_size: Vec2,
}

impl Backdrop {
    /// Layers for `elapsed_ms` of timer time; animates in every phase
    pub fn at(bounds: Bounds, elapsed_ms: u64) -> Self {
        let size = Vec2::new(bounds.width, bounds.height);
        let width = bounds.width.max(1.0);
        let delta = ((elapsed_ms / DEBRIS_SCROLL_DIVISOR) as f32).rem_euclid(width);
        let y = bounds.height / 2.0;
        Self {
            nebula_center: bounds.center(),
            nebula_size: size,
            debris_centers: [
                Vec2::new(delta - bounds.width / 2.0, y),
                Vec2::new(delta + bounds.width / 2.0, y),
            ],
            debris_size: size,
        }
    }
}

/// Player ship telemetry for the debug overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugReadout {
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    /// Velocity a missile fired this frame would have
    pub missile_velocity: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub lives: i32,
    pub score: u64,
    pub best_score: Option<u64>,
    pub splash_visible: bool,
    /// Baseline-left of the "Lives" label
    pub lives_anchor: Vec2,
    /// Baseline-right of the "Score" label; the host subtracts the text width
    pub score_anchor: Vec2,
    pub font_size: f32,
    pub debug: Option<DebugReadout>,
}

impl Hud {
    pub fn from_state(state: &GameState, best_score: Option<u64>) -> Self {
        let baseline = HUD_GUTTER + HUD_FONT_SIZE / 2.0;
        let debug = state.settings.debug_readout.then(|| DebugReadout {
            position: state.player.sprite.pos,
            velocity: state.player.sprite.vel,
            rotation: state.player.sprite.rotation,
            missile_velocity: state.player.missile_velocity(),
        });
        Self {
            lives: state.score.lives,
            score: state.score.score,
            best_score,
            splash_visible: !state.is_playing(),
            lives_anchor: Vec2::new(HUD_GUTTER, baseline),
            score_anchor: Vec2::new(state.bounds.width - HUD_GUTTER, baseline),
            font_size: HUD_FONT_SIZE,
            debug,
        }
    }

    pub fn lives_text(&self) -> String {
        format!("Lives: {}", self.lives)
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}

//! Per-tick motion primitives
//!
//! Every moving sprite goes through these in the same order; see
//! [`Sprite::update`](super::sprite::Sprite::update).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Playfield extent used for wrapping and spawn sampling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// A field sprites can wrap on: finite and non-empty on both axes.
    /// Hosts report 0x0 while minimised.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Half-open containment: `[0, width) x [0, height)`
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x < self.width && pos.y >= 0.0 && pos.y < self.height
    }
}

/// Unit direction for a rotation in radians
#[inline]
pub fn forward_vector(rotation: f32) -> Vec2 {
    Vec2::new(rotation.cos(), rotation.sin())
}

/// Non-negative modulo that never returns `extent` itself.
///
/// `rem_euclid` can round a tiny negative value up to exactly `extent`,
/// which would put the sprite one pixel outside the field.
#[inline]
fn wrap_axis(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Move `pos` by `velocity` on the torus described by `bounds`
#[inline]
pub fn wrap_position(pos: Vec2, velocity: Vec2, bounds: Bounds) -> Vec2 {
    Vec2::new(
        wrap_axis(pos.x + velocity.x, bounds.width),
        wrap_axis(pos.y + velocity.y, bounds.height),
    )
}

/// Rotation is never normalized; only its sine/cosine are used.
#[inline]
pub fn apply_rotation(rotation: f32, rotation_velocity: f32) -> f32 {
    rotation + rotation_velocity
}

#[inline]
pub fn apply_forward(velocity: Vec2, forward: Vec2, acceleration: f32) -> Vec2 {
    velocity + forward * acceleration
}

#[inline]
pub fn apply_friction(velocity: Vec2, friction: f32) -> Vec2 {
    velocity * (1.0 - friction)
}

//! Shared physical state for everything that moves
//!
//! Rocks, missiles, explosions and the ship are all a [`Sprite`] tagged with a
//! [`SpriteKind`]; behavior differences live in the constructors in
//! [`entities`](super::entities), not in separate types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematics::{
    Bounds, apply_forward, apply_friction, apply_rotation, forward_vector, wrap_position,
};

/// What a sprite is, for the presentation layer and for spawn policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    Ship,
    Rock,
    Missile,
    Explosion,
}

/// Transient snapshot handed to the presentation layer each draw tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawDescriptor {
    pub kind: SpriteKind,
    pub position: Vec2,
    pub size: Vec2,
    pub rotation: f32,
    pub age: u32,
    /// True when `frame` indexes into a sprite sheet that advances with age
    pub animated: bool,
    /// Sprite sheet cell (ship: 0 rest / 1 thrust, explosion: age - 1)
    pub frame: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub size: Vec2,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radians, unbounded
    pub rotation: f32,
    pub rotation_vel: f32,
    pub acceleration: f32,
    /// Fraction of velocity removed per tick, `0 <= friction < 1`
    pub friction: f32,
    /// Ticks survived
    pub age: u32,
    /// 0 = immortal, otherwise expires once `age > lifetime`
    pub lifetime: u32,
    pub accelerating: bool,
    /// Sprite sheet cells an animated sprite steps through
    pub frames: u32,
}

impl Sprite {
    /// An immortal, motionless sprite
    pub fn new(kind: SpriteKind, size: Vec2, pos: Vec2) -> Self {
        Self {
            kind,
            size,
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
            rotation_vel: 0.0,
            acceleration: 0.0,
            friction: 0.0,
            age: 0,
            lifetime: 0,
            accelerating: false,
            frames: 1,
        }
    }

    /// Collision radius; every sprite is treated as a circle
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.x / 2.0
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.lifetime > 0 && self.age > self.lifetime
    }

    pub fn forward(&self) -> Vec2 {
        forward_vector(self.rotation)
    }

    /// Advance one tick and return what to draw, or `None` once expired.
    ///
    /// Rotation is advanced before the thrust direction is taken from it, and
    /// position moves with the velocity from the previous tick, so thrust lags
    /// a rotation change by one tick.
    pub fn update(&mut self, bounds: Bounds) -> Option<DrawDescriptor> {
        self.age = self.age.saturating_add(1);
        if self.is_expired() {
            return None;
        }

        self.rotation = apply_rotation(self.rotation, self.rotation_vel);
        self.pos = wrap_position(self.pos, self.vel, bounds);
        if self.accelerating {
            self.vel = apply_forward(self.vel, self.forward(), self.acceleration);
        }
        if self.friction > 0.0 {
            self.vel = apply_friction(self.vel, self.friction);
        }

        Some(self.descriptor())
    }

    pub fn descriptor(&self) -> DrawDescriptor {
        let (animated, frame) = match self.kind {
            SpriteKind::Explosion => (
                true,
                self.age.saturating_sub(1).min(self.frames.saturating_sub(1)),
            ),
            SpriteKind::Ship => (false, u32::from(self.accelerating)),
            SpriteKind::Rock | SpriteKind::Missile => (false, 0),
        };
        DrawDescriptor {
            kind: self.kind,
            position: self.pos,
            size: self.size,
            rotation: self.rotation,
            age: self.age,
            animated,
            frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    fn drifting(vel: Vec2, friction: f32) -> Sprite {
        let mut sprite = Sprite::new(SpriteKind::Rock, Vec2::splat(90.0), Vec2::new(400.0, 300.0));
        sprite.vel = vel;
        sprite.friction = friction;
        sprite
    }

    #[test]
    fn test_update_moves_with_previous_velocity() {
        let mut sprite = drifting(Vec2::new(2.0, -1.0), 0.5);
        let drawn = sprite.update(field()).unwrap();
        // Position uses the pre-friction velocity
        assert_eq!(drawn.position, Vec2::new(402.0, 299.0));
        assert_eq!(sprite.vel, Vec2::new(1.0, -0.5));
        assert_eq!(sprite.age, 1);
    }

    #[test]
    fn test_thrust_uses_rotation_after_spin() {
        let mut sprite = drifting(Vec2::ZERO, 0.0);
        sprite.rotation = 0.0;
        sprite.rotation_vel = std::f32::consts::FRAC_PI_2;
        sprite.acceleration = 1.0;
        sprite.accelerating = true;

        sprite.update(field());
        // Position did not move this tick; velocity points along the new rotation
        assert_eq!(sprite.pos, Vec2::new(400.0, 300.0));
        assert!(sprite.vel.x.abs() < 1e-6);
        assert!((sprite.vel.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_expired_sprite_is_frozen() {
        let mut sprite = drifting(Vec2::new(1.0, 0.0), 0.0);
        sprite.lifetime = 2;
        assert!(sprite.update(field()).is_some());
        assert!(sprite.update(field()).is_some());
        let before = sprite.pos;
        assert!(sprite.update(field()).is_none());
        assert!(sprite.is_expired());
        assert_eq!(sprite.pos, before);
    }

    #[test]
    fn test_immortal_never_expires() {
        let mut sprite = drifting(Vec2::ZERO, 0.0);
        for _ in 0..10_000 {
            assert!(sprite.update(field()).is_some());
        }
    }

    #[test]
    fn test_explosion_frames_follow_age() {
        let mut sprite = Sprite::new(SpriteKind::Explosion, Vec2::splat(128.0), Vec2::ZERO);
        sprite.lifetime = 40;
        sprite.frames = 32;
        let first = sprite.update(field()).unwrap();
        assert!(first.animated);
        assert_eq!(first.frame, 0);
        let mut last = first;
        while let Some(drawn) = sprite.update(field()) {
            last = drawn;
        }
        assert_eq!(last.frame, 31);
    }

    #[test]
    fn test_ship_frame_tracks_thrust() {
        let mut ship = Sprite::new(SpriteKind::Ship, Vec2::splat(90.0), Vec2::ZERO);
        assert_eq!(ship.descriptor().frame, 0);
        ship.accelerating = true;
        assert_eq!(ship.descriptor().frame, 1);
    }

    proptest! {
        #[test]
        fn prop_friction_scales_speed(
            vx in -20.0f32..20.0,
            vy in -20.0f32..20.0,
            friction in 0.01f32..0.99,
        ) {
            let mut sprite = drifting(Vec2::new(vx, vy), friction);
            let before = sprite.vel.length();
            sprite.update(field());
            let expected = (1.0 - friction) * before;
            prop_assert!((sprite.vel.length() - expected).abs() <= 1e-4 * before.max(1.0));
        }

        #[test]
        fn prop_position_stays_wrapped(
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
            spin in -1.0f32..1.0,
            accel in 0.0f32..0.5,
            ticks in 1usize..300,
        ) {
            let mut sprite = drifting(Vec2::new(vx, vy), 0.0);
            sprite.rotation_vel = spin;
            sprite.acceleration = accel;
            sprite.accelerating = true;
            for _ in 0..ticks {
                sprite.update(field());
                prop_assert!(field().contains(sprite.pos), "{:?}", sprite.pos);
            }
        }

        #[test]
        fn prop_expiry_boundary(lifetime in 1u32..200) {
            let mut sprite = drifting(Vec2::ZERO, 0.0);
            sprite.lifetime = lifetime;
            for _ in 0..lifetime {
                prop_assert!(sprite.update(field()).is_some());
            }
            prop_assert!(sprite.update(field()).is_none());
        }
    }
}

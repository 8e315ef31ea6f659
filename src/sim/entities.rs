//! Rocks, missiles, explosions and the spaceship
//!
//! Each variant is a [`Sprite`] with its own construction and lifetime policy.
//! The player is not a separate type: it is a [`Spaceship`] with `input_bound`
//! set.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::group::{EntityId, Group};
use super::kinematics::{Bounds, wrap_position};
use super::sprite::{DrawDescriptor, Sprite, SpriteKind};
use crate::settings::{RockSpawnTuning, Settings};

/// `uniform(lo, hi)` that tolerates a degenerate range
fn uniform<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

fn random_sign<R: Rng>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// A new rock somewhere on the field. Rocks never slow down and never expire.
pub fn spawn_rock<R: Rng>(
    rng: &mut R,
    bounds: Bounds,
    size: f32,
    tuning: &RockSpawnTuning,
) -> Sprite {
    let pos = Vec2::new(
        uniform(rng, 0.0, bounds.width),
        uniform(rng, 0.0, bounds.height),
    );
    let mut rock = Sprite::new(SpriteKind::Rock, Vec2::splat(size), pos);
    rock.vel = Vec2::new(
        random_sign(rng) * uniform(rng, tuning.speed_min, tuning.speed_max),
        random_sign(rng) * uniform(rng, tuning.speed_min, tuning.speed_max),
    );
    rock.rotation = uniform(rng, 0.0, std::f32::consts::TAU);
    rock.rotation_vel = random_sign(rng) * rng.random::<f32>() * tuning.spin_scale;
    rock.acceleration = rng.random::<f32>() * tuning.acceleration_scale;
    rock.accelerating = true;
    rock.friction = 0.0;
    rock
}

/// Short-lived visual at `pos` stepping through `frames` sheet cells; never collides
pub fn explosion(pos: Vec2, size: f32, lifetime: u32, frames: u32) -> Sprite {
    let mut explosion = Sprite::new(SpriteKind::Explosion, Vec2::splat(size), pos);
    explosion.lifetime = lifetime;
    explosion.frames = frames;
    explosion
}

/// How the ship's missiles are built
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissileSpec {
    pub size: f32,
    pub speed: f32,
    pub lifetime: u32,
}

impl MissileSpec {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            size: settings.missile_size,
            speed: settings.missile_speed,
            lifetime: settings.missile_lifetime,
        }
    }
}

/// Which way a rotate key turns the ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spaceship {
    pub sprite: Sprite,
    /// Missiles this ship has fired and that are still alive
    pub missiles: Group<Sprite>,
    pub missile: MissileSpec,
    /// Radians per tick while turning
    pub turn_rate: f32,
    /// Set for the single ship driven by player input
    pub input_bound: bool,
    reset_position: Vec2,
}

impl Spaceship {
    pub fn new(settings: &Settings, position: Vec2) -> Self {
        let mut sprite = Sprite::new(SpriteKind::Ship, Vec2::splat(settings.ship_size), position);
        sprite.acceleration = settings.ship_acceleration;
        sprite.friction = settings.ship_friction;
        Self {
            sprite,
            missiles: Group::with_capacity(settings.max_missiles),
            missile: MissileSpec::from_settings(settings),
            turn_rate: settings.ship_turn_rate,
            input_bound: false,
            reset_position: position,
        }
    }

    /// The player's ship, parked at the center of the field
    pub fn player(settings: &Settings) -> Self {
        let mut ship = Self::new(settings, settings.bounds().center());
        ship.input_bound = true;
        ship
    }

    pub fn reset_position(&self) -> Vec2 {
        self.reset_position
    }

    pub fn rotate(&mut self, turn: Turn) {
        self.sprite.rotation_vel = match turn {
            Turn::Left => -self.turn_rate,
            Turn::Right => self.turn_rate,
        };
    }

    pub fn rotate_end(&mut self) {
        self.sprite.rotation_vel = 0.0;
    }

    pub fn thrust_start(&mut self) {
        self.sprite.accelerating = true;
    }

    pub fn thrust_stop(&mut self) {
        self.sprite.accelerating = false;
    }

    pub fn is_thrusting(&self) -> bool {
        self.sprite.accelerating
    }

    /// Velocity a missile fired right now would leave with
    pub fn missile_velocity(&self) -> Vec2 {
        self.sprite.vel + self.sprite.forward() * self.missile.speed
    }

    /// Launch a missile from the ship's nose. Returns `None` when the ship
    /// already has as many missiles in flight as it may.
    pub fn fire(&mut self, bounds: Bounds) -> Option<EntityId> {
        let forward = self.sprite.forward();
        let nose = wrap_position(self.sprite.pos, forward * self.sprite.radius(), bounds);

        let mut missile = Sprite::new(SpriteKind::Missile, Vec2::splat(self.missile.size), nose);
        missile.vel = self.missile_velocity();
        missile.rotation = self.sprite.rotation;
        missile.lifetime = self.missile.lifetime;
        missile.friction = 0.0;

        self.missiles.add(missile)
    }

    /// Back to the spawn point, at rest, facing the default direction.
    /// The player's spawn point is the center of the current field.
    pub fn reset(&mut self, bounds: Bounds) {
        if self.input_bound {
            self.reset_position = bounds.center();
        }
        self.sprite.pos = self.reset_position;
        self.sprite.vel = Vec2::ZERO;
        self.sprite.rotation = 0.0;
        self.sprite.rotation_vel = 0.0;
        self.sprite.accelerating = false;
    }

    /// Advance the ship and its missiles, collecting what to draw
    pub fn update(&mut self, bounds: Bounds, drawn: &mut Vec<DrawDescriptor>) {
        drawn.extend(self.sprite.update(bounds));
        for (_, missile) in self.missiles.iter_mut() {
            drawn.extend(missile.update(bounds));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    #[test]
    fn test_rock_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let tuning = RockSpawnTuning::default();
        for _ in 0..500 {
            let rock = spawn_rock(&mut rng, field(), 90.0, &tuning);
            assert!(field().contains(rock.pos));
            for component in [rock.vel.x.abs(), rock.vel.y.abs()] {
                assert!((1.0..3.0).contains(&component), "{component}");
            }
            assert!(rock.rotation_vel.abs() <= 0.05);
            assert!((0.0..0.2).contains(&rock.acceleration));
            assert_eq!(rock.friction, 0.0);
            assert_eq!(rock.lifetime, 0);
            assert!(rock.accelerating);
        }
    }

    #[test]
    fn test_rock_spawn_degenerate_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = RockSpawnTuning {
            speed_min: 2.0,
            speed_max: 2.0,
            ..Default::default()
        };
        let rock = spawn_rock(&mut rng, field(), 90.0, &tuning);
        assert_eq!(rock.vel.abs(), Vec2::splat(2.0));
    }

    #[test]
    fn test_missile_leaves_from_nose() {
        let settings = Settings::default();
        let mut ship = Spaceship::player(&settings);
        ship.sprite.vel = Vec2::new(1.0, 0.0);

        let id = ship.fire(field()).unwrap();
        let missile = ship.missiles.get(id).unwrap();
        assert_eq!(missile.pos, Vec2::new(400.0 + 45.0, 300.0));
        assert_eq!(missile.vel, Vec2::new(1.0 + settings.missile_speed, 0.0));
        assert_eq!(missile.lifetime, 100);
        assert_eq!(missile.friction, 0.0);
    }

    #[test]
    fn test_missile_spawn_wraps() {
        let settings = Settings::default();
        let mut ship = Spaceship::new(&settings, Vec2::new(790.0, 10.0));
        let id = ship.fire(field()).unwrap();
        assert!(field().contains(ship.missiles.get(id).unwrap().pos));
    }

    #[test]
    fn test_fire_respects_capacity() {
        let settings = Settings {
            max_missiles: Some(3),
            ..Default::default()
        };
        let mut ship = Spaceship::player(&settings);
        let fired = (0..10).filter_map(|_| ship.fire(field())).count();
        assert_eq!(fired, 3);
        assert_eq!(ship.missiles.count(), 3);
    }

    #[test]
    fn test_rotation_keys() {
        let mut ship = Spaceship::player(&Settings::default());
        ship.rotate(Turn::Left);
        assert_eq!(ship.sprite.rotation_vel, -0.05);
        ship.rotate(Turn::Right);
        assert_eq!(ship.sprite.rotation_vel, 0.05);
        ship.rotate_end();
        assert_eq!(ship.sprite.rotation_vel, 0.0);
    }

    #[test]
    fn test_reset_returns_to_spawn() {
        let mut ship = Spaceship::player(&Settings::default());
        ship.rotate(Turn::Right);
        ship.thrust_start();
        let mut drawn = Vec::new();
        for _ in 0..30 {
            ship.update(field(), &mut drawn);
        }
        assert_ne!(ship.sprite.pos, ship.reset_position());

        ship.reset(field());
        assert_eq!(ship.sprite.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ship.sprite.vel, Vec2::ZERO);
        assert_eq!(ship.sprite.rotation, 0.0);
        assert_eq!(ship.sprite.rotation_vel, 0.0);
        assert!(!ship.is_thrusting());
    }

    #[test]
    fn test_player_resets_to_current_field_center() {
        let mut ship = Spaceship::player(&Settings::default());
        ship.reset(Bounds::new(300.0, 200.0));
        assert_eq!(ship.sprite.pos, Vec2::new(150.0, 100.0));
        assert_eq!(ship.reset_position(), Vec2::new(150.0, 100.0));

        // Other ships keep their own spawn point
        let mut drone = Spaceship::new(&Settings::default(), Vec2::new(20.0, 30.0));
        drone.sprite.pos = Vec2::new(50.0, 50.0);
        drone.reset(Bounds::new(300.0, 200.0));
        assert_eq!(drone.sprite.pos, Vec2::new(20.0, 30.0));
    }

    #[test]
    fn test_explosion_is_short_lived() {
        let mut boom = explosion(Vec2::new(10.0, 10.0), 128.0, 24, 24);
        let frames: Vec<u32> = (0..30).filter_map(|_| boom.update(field())).map(|d| d.frame).collect();
        assert_eq!(frames, (0..24).collect::<Vec<_>>());
        assert!(boom.is_expired());
    }
}

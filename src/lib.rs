//! Rock Drift - a wrap-around asteroids arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (kinematics, sprites, collisions, game state, ticks)
//! - `director`: Owns the game across frames and wires host callbacks into `sim`
//! - `platform`: Contracts for the host presentation layer (viewport, clock, input, drawing)
//! - `audio`: Fire-and-forget sound intents
//! - `settings`: Data-driven game tuning

pub mod audio;
pub mod director;
pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use director::Director;
pub use error::{InvariantViolation, SettingsError};
pub use settings::{Difficulty, RockSpawnTuning, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Periodic timer granularity (ms of simulated time per timer tick)
    pub const TIMER_PERIOD_MS: u64 = 25;
    /// A rock spawn check fires whenever elapsed time is a multiple of this
    pub const SPAWN_PERIOD_MS: u64 = 1000;

    pub const INITIAL_LIVES: i32 = 3;

    /// Ship defaults
    pub const SHIP_SIZE: f32 = 90.0;
    pub const SHIP_ACCELERATION: f32 = 0.2;
    /// Fraction of velocity removed per tick
    pub const SHIP_FRICTION: f32 = 0.02;
    /// Radians per tick while a rotate key is held
    pub const SHIP_TURN_RATE: f32 = 0.05;

    /// Rock defaults
    pub const ROCK_SIZE: f32 = 90.0;
    pub const MAX_ROCKS: usize = 12;

    /// Missile defaults
    pub const MISSILE_SIZE: f32 = 10.0;
    pub const MISSILE_SPEED: f32 = 6.0;
    pub const MISSILE_LIFETIME: u32 = 100;
    pub const MAX_MISSILES: usize = 10;

    /// Explosion defaults (24-frame sprite sheet)
    pub const EXPLOSION_SIZE: f32 = 128.0;
    pub const EXPLOSION_LIFETIME: u32 = 24;
    pub const EXPLOSION_FRAMES: u32 = 24;

    /// Debris layer scrolls one pixel per this many ms
    pub const DEBRIS_SCROLL_DIVISOR: u64 = 50;

    /// HUD layout
    pub const HUD_GUTTER: f32 = 15.0;
    pub const HUD_FONT_SIZE: f32 = 15.0;
}

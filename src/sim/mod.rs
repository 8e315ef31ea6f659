//! Simulation core
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Fixed periodic timer for spawning, one update per draw tick
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, asset or audio playback code

pub mod collision;
pub mod entities;
pub mod group;
pub mod hud;
pub mod kinematics;
pub mod score;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::{Collidable, collide, collide_group};
pub use entities::{MissileSpec, Spaceship, Turn, explosion, spawn_rock};
pub use group::{EntityId, Group};
pub use hud::{Backdrop, DebugReadout, Hud};
pub use kinematics::{
    Bounds, apply_forward, apply_friction, apply_rotation, forward_vector, wrap_position,
};
pub use score::Score;
pub use sprite::{DrawDescriptor, Sprite, SpriteKind};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{DrawOutcome, apply_input, check_collisions, draw_tick, game_over_check, timer_tick};

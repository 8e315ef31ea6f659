//! Game state and the splash/playing state machine
//!
//! [`GameState`] exclusively owns every simulated object: the player ship
//! (which owns its missiles), the rock and explosion groups and the score.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::{Spaceship, explosion, spawn_rock};
use super::group::{EntityId, Group};
use super::kinematics::Bounds;
use super::score::Score;
use super::sprite::Sprite;
use crate::error::InvariantViolation;
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Overlay shown, waiting for a click; nothing spawns or collides
    #[default]
    Splash,
    /// Active gameplay
    Playing,
}

/// Something that changed the score, carrying the score right after it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A missile destroyed a rock
    RockDestroyed { score: Score },
    /// A rock hit the player
    LifeLost { score: Score },
    /// Lives ran out; `final_score` is the score just before the reset
    GameOver {
        final_score: Score,
        ticks_survived: u64,
    },
}

impl GameEvent {
    pub fn score(&self) -> Score {
        match *self {
            GameEvent::RockDestroyed { score } | GameEvent::LifeLost { score } => score,
            GameEvent::GameOver { final_score, .. } => final_score,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub settings: Settings,
    /// Field size as of the last draw tick
    pub bounds: Bounds,
    pub phase: GamePhase,
    pub player: Spaceship,
    pub rocks: Group<Sprite>,
    pub explosions: Group<Sprite>,
    pub score: Score,
    /// Draw ticks since the current game started
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds: settings.bounds(),
            phase: GamePhase::Splash,
            player: Spaceship::player(&settings),
            rocks: Group::bounded(settings.max_rocks),
            explosions: Group::unbounded(),
            score: Score::new(settings.initial_lives),
            time_ticks: 0,
            settings,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Splash -> Playing. Does nothing if a game is already running.
    pub fn start(&mut self) -> bool {
        if self.is_playing() {
            return false;
        }
        self.score.reset();
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        log::info!("Game started (seed {})", self.seed);
        true
    }

    /// Back to the splash screen with an empty field and a fresh score.
    /// Running explosions are left to finish their animation.
    pub fn reset(&mut self) {
        self.rocks.clear();
        self.player.missiles.clear();
        self.player.reset(self.bounds);
        self.score.reset();
        self.phase = GamePhase::Splash;
    }

    /// One new rock at a random spot, unless the field is already full
    pub fn spawn_rock(&mut self) -> Option<EntityId> {
        let rock = spawn_rock(
            &mut self.rng,
            self.bounds,
            self.settings.rock_size,
            &self.settings.rock_spawn,
        );
        let pos = rock.pos;
        let id = self.rocks.add(rock);
        match id {
            Some(id) => log::debug!("Rock {id} spawned at ({:.1}, {:.1})", pos.x, pos.y),
            None => log::debug!("Rock spawn dropped, {} rocks on field", self.rocks.count()),
        }
        id
    }

    pub fn spawn_explosion(&mut self, pos: Vec2) -> Option<EntityId> {
        self.explosions.add(explosion(
            pos,
            self.settings.explosion_size,
            self.settings.explosion_lifetime,
            self.settings.explosion_frames,
        ))
    }

    /// Drop every expired sprite, returning how many went
    pub fn prune_expired(&mut self) -> usize {
        self.player.missiles.retain(|m| !m.is_expired())
            + self.rocks.retain(|r| !r.is_expired())
            + self.explosions.retain(|e| !e.is_expired())
    }

    /// Check the contracts every completed draw tick must leave intact
    pub fn validate_invariants(&self) -> Result<(), InvariantViolation> {
        let ship = &self.player.sprite;
        if !ship.pos.is_finite() || !ship.vel.is_finite() {
            return Err(InvariantViolation::NonFiniteKinematics);
        }
        if !self.bounds.contains(ship.pos) {
            return Err(InvariantViolation::ShipOutOfBounds {
                x: ship.pos.x,
                y: ship.pos.y,
            });
        }

        for (id, rock) in self.rocks.iter() {
            if !self.bounds.contains(rock.pos) {
                return Err(InvariantViolation::RockOutOfBounds {
                    id,
                    x: rock.pos.x,
                    y: rock.pos.y,
                });
            }
        }
        for (id, missile) in self.player.missiles.iter() {
            if !self.bounds.contains(missile.pos) {
                return Err(InvariantViolation::MissileOutOfBounds {
                    id,
                    x: missile.pos.x,
                    y: missile.pos.y,
                });
            }
        }
        for (id, boom) in self.explosions.iter() {
            if !self.bounds.contains(boom.pos) {
                return Err(InvariantViolation::ExplosionOutOfBounds {
                    id,
                    x: boom.pos.x,
                    y: boom.pos.y,
                });
            }
        }

        for group in [&self.rocks, &self.player.missiles] {
            if let Some(max) = group.max_count().filter(|max| group.count() > *max) {
                return Err(InvariantViolation::GroupOverCapacity {
                    count: group.count(),
                    max,
                });
            }
        }

        if self.is_playing() && self.score.is_out_of_lives() {
            return Err(InvariantViolation::NegativeLives {
                lives: self.score.lives,
            });
        }

        Ok(())
    }
}

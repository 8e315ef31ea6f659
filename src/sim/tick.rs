//! Per-callback simulation steps
//!
//! The host drives the game through three callbacks, each handled here:
//! - [`draw_tick`]: update every sprite, resolve collisions, prune the dead
//! - [`timer_tick`]: fixed-period rock spawning
//! - [`apply_input`]: key and click events
//!
//! Within a draw tick the order is always update, then collide, then prune.

use super::collision::collide_group;
use super::entities::Turn;
use super::group::EntityId;
use super::kinematics::Bounds;
use super::sprite::DrawDescriptor;
use super::state::{GameEvent, GameState};
use crate::audio::{AudioCommand, AudioSink, SoundEffect};
use crate::platform::input::{Action, InputEvent};

/// What one draw tick produced
#[derive(Debug, Clone, Default)]
pub struct DrawOutcome {
    /// Sprites that were alive this tick, in draw order (ship, missiles,
    /// rocks, explosions)
    pub drawn: Vec<DrawDescriptor>,
    pub events: Vec<GameEvent>,
}

/// Advance the game state by one rendered frame. A degenerate `bounds`
/// (e.g. a minimised 0x0 canvas) is ignored and the last valid field is used.
pub fn draw_tick(state: &mut GameState, bounds: Bounds, audio: &mut impl AudioSink) -> DrawOutcome {
    if bounds.is_valid() {
        state.bounds = bounds;
    } else {
        log::debug!(
            "Ignoring {}x{} frame, keeping {}x{} field",
            bounds.width,
            bounds.height,
            state.bounds.width,
            state.bounds.height
        );
    }
    let bounds = state.bounds;
    if state.is_playing() {
        state.time_ticks += 1;
    }

    let mut drawn = Vec::with_capacity(
        1 + state.player.missiles.count() + state.rocks.count() + state.explosions.count(),
    );
    state.player.update(bounds, &mut drawn);
    for (_, rock) in state.rocks.iter_mut() {
        drawn.extend(rock.update(bounds));
    }
    for (_, boom) in state.explosions.iter_mut() {
        drawn.extend(boom.update(bounds));
    }

    let events = check_collisions(state, audio);
    state.prune_expired();

    DrawOutcome { drawn, events }
}

/// Spawn check for one periodic timer tick. `elapsed_ms` is the timer's
/// running total; a rock spawns only on exact multiples of the spawn period
/// and only while playing.
pub fn timer_tick(state: &mut GameState, elapsed_ms: u64) -> Option<EntityId> {
    let period = state.settings.spawn_period_ms;
    if !state.is_playing() || period == 0 || !elapsed_ms.is_multiple_of(period) {
        return None;
    }
    state.spawn_rock()
}

/// Resolve rock-vs-player and rock-vs-missile hits for this tick.
///
/// Each check resolves only its first hit. Losing the last life resets the
/// game immediately and skips the remaining checks for the tick.
pub fn check_collisions(state: &mut GameState, audio: &mut impl AudioSink) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_playing() {
        return events;
    }

    if let Some(rock_id) = collide_group(&state.player.sprite, &state.rocks) {
        destroy_rock(state, rock_id, audio);
        state.score.lose_life();
        log::debug!("Player hit by rock {rock_id}, {} lives left", state.score.lives);

        let event = GameEvent::LifeLost { score: state.score };
        events.push(event);
        if let Some(game_over) = game_over_check(state, &event, audio) {
            events.push(game_over);
            return events;
        }
    }

    for missile_id in state.player.missiles.ids() {
        let hit = match state.player.missiles.get(missile_id) {
            Some(missile) if !missile.is_expired() => collide_group(missile, &state.rocks),
            _ => None,
        };
        let Some(rock_id) = hit else { continue };

        state.player.missiles.remove(missile_id);
        destroy_rock(state, rock_id, audio);
        state.score.add_point();
        log::debug!("Missile {missile_id} destroyed rock {rock_id}");

        let event = GameEvent::RockDestroyed { score: state.score };
        events.push(event);
        if let Some(game_over) = game_over_check(state, &event, audio) {
            events.push(game_over);
            return events;
        }
    }

    events
}

/// Remove a rock and leave an explosion where it was
fn destroy_rock(state: &mut GameState, rock_id: EntityId, audio: &mut impl AudioSink) {
    if let Some(rock) = state.rocks.remove(rock_id) {
        state.spawn_explosion(rock.pos);
        for command in AudioCommand::restart(SoundEffect::Explosion) {
            audio.command(command);
        }
    }
}

/// Playing -> Splash once an event shows no lives left.
/// Returns the game-over event when the reset happened.
pub fn game_over_check(
    state: &mut GameState,
    event: &GameEvent,
    audio: &mut impl AudioSink,
) -> Option<GameEvent> {
    if !state.is_playing() || !event.score().is_out_of_lives() {
        return None;
    }

    let game_over = GameEvent::GameOver {
        final_score: state.score,
        ticks_survived: state.time_ticks,
    };
    log::info!(
        "Game over: score {} after {} ticks",
        state.score.score,
        state.time_ticks
    );

    state.reset();
    for command in AudioCommand::stop(SoundEffect::Thrust)
        .into_iter()
        .chain(AudioCommand::stop(SoundEffect::Soundtrack))
    {
        audio.command(command);
    }
    Some(game_over)
}

/// Apply one input event. In the splash phase only a click does anything
/// (it starts a game); while playing, clicks are ignored and keys steer the
/// input-bound ship.
pub fn apply_input(state: &mut GameState, event: InputEvent, audio: &mut impl AudioSink) {
    match event {
        InputEvent::Click(_) => {
            if state.start() {
                audio.command(AudioCommand::Play(SoundEffect::Soundtrack));
            }
        }
        InputEvent::KeyDown(key) => {
            if !state.is_playing() || !state.player.input_bound {
                return;
            }
            match key.action() {
                Some(Action::RotateLeft) => state.player.rotate(Turn::Left),
                Some(Action::RotateRight) => state.player.rotate(Turn::Right),
                Some(Action::Thrust) => {
                    state.player.thrust_start();
                    audio.command(AudioCommand::Play(SoundEffect::Thrust));
                }
                Some(Action::Fire) => {
                    if state.player.fire(state.bounds).is_some() {
                        for command in AudioCommand::restart(SoundEffect::Missile) {
                            audio.command(command);
                        }
                    }
                }
                None => {}
            }
        }
        InputEvent::KeyUp(key) => {
            if !state.is_playing() || !state.player.input_bound {
                return;
            }
            match key.action() {
                Some(Action::RotateLeft | Action::RotateRight) => state.player.rotate_end(),
                Some(Action::Thrust) => {
                    state.player.thrust_stop();
                    for command in AudioCommand::stop(SoundEffect::Thrust) {
                        audio.command(command);
                    }
                }
                Some(Action::Fire) | None => {}
            }
        }
    }
}

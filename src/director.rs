//! Callback wiring between the host and the simulation
//!
//! The [`Director`] is the single owner of everything that lives across
//! frames: the game state, the simulated clock and the best score so far.
//! A host forwards its three callbacks (timer, draw, input) and nothing else.

use crate::audio::AudioSink;
use crate::platform::{Clock, InputEvent, PresentationSink, Viewport};
use crate::settings::Settings;
use crate::sim::{Backdrop, EntityId, GameEvent, GameState, Hud, apply_input, draw_tick, timer_tick};

#[derive(Debug, Clone)]
pub struct Director {
    state: GameState,
    clock: Clock,
    /// Highest final score of any finished game this session
    best_score: Option<u64>,
}

impl Director {
    pub fn new(settings: Settings, seed: u64) -> Self {
        log::info!(
            "Director ready: {}x{} field, {} difficulty, seed {seed}",
            settings.field_width,
            settings.field_height,
            settings.difficulty.as_str()
        );
        Self {
            clock: Clock::new(settings.timer_period_ms),
            state: GameState::new(settings, seed),
            best_score: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn best_score(&self) -> Option<u64> {
        self.best_score
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state, self.best_score)
    }

    /// Periodic timer callback: advance simulated time and maybe spawn a rock
    pub fn on_timer(&mut self) -> Option<EntityId> {
        let elapsed = self.clock.advance();
        timer_tick(&mut self.state, elapsed)
    }

    /// Draw callback: one full simulation step, then hand the frame to `sink`
    pub fn on_draw(
        &mut self,
        viewport: Viewport,
        sink: &mut impl PresentationSink,
        audio: &mut impl AudioSink,
    ) -> Vec<GameEvent> {
        let outcome = draw_tick(&mut self.state, viewport.into(), audio);

        sink.begin_frame(viewport);
        sink.draw_backdrop(&Backdrop::at(self.state.bounds, self.clock.elapsed_ms()));
        for sprite in &outcome.drawn {
            sink.draw_sprite(sprite);
        }

        for event in &outcome.events {
            if let GameEvent::GameOver { final_score, .. } = *event {
                self.record_score(final_score.score);
            }
        }

        sink.draw_hud(&self.hud());
        sink.end_frame();

        debug_assert_eq!(
            self.state.validate_invariants(),
            Ok(()),
            "game state invariant broken"
        );

        outcome.events
    }

    pub fn on_input(&mut self, event: InputEvent, audio: &mut impl AudioSink) {
        apply_input(&mut self.state, event, audio);
    }

    fn record_score(&mut self, score: u64) {
        if self.best_score.is_none_or(|best| score > best) {
            log::info!("New best score: {score}");
            self.best_score = Some(score);
        }
    }
}

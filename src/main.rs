//! Rock Drift entry point
//!
//! Native headless driver: plays a scripted autopilot session against a
//! logging presentation layer and reports how it went.
//!
//! Usage: `rock-drift [settings.json] [frames]`

use rock_drift::audio::{AudioCommand, AudioSink};
use rock_drift::platform::{InputEvent, Key, PresentationSink, Viewport};
use rock_drift::sim::{Backdrop, DrawDescriptor, GameEvent, Hud};
use rock_drift::{Director, Settings};

/// Host refresh rate the autopilot pretends to run at
const FRAMES_PER_SECOND: u64 = 60;
const DEFAULT_FRAMES: u64 = 60 * FRAMES_PER_SECOND;

/// Counts what would have been drawn and traces it
#[derive(Debug, Default)]
struct LogSink {
    sprites_this_frame: usize,
    peak_sprites: usize,
}

impl PresentationSink for LogSink {
    fn begin_frame(&mut self, _viewport: Viewport) {
        self.sprites_this_frame = 0;
    }

    fn draw_backdrop(&mut self, backdrop: &Backdrop) {
        log::trace!("debris at x={:.0}", backdrop.debris_centers[0].x);
    }

    fn draw_sprite(&mut self, sprite: &DrawDescriptor) {
        self.sprites_this_frame += 1;
        log::trace!(
            "{:?} at ({:.1}, {:.1}) frame {}",
            sprite.kind,
            sprite.position.x,
            sprite.position.y,
            sprite.frame
        );
    }

    fn draw_hud(&mut self, hud: &Hud) {
        log::trace!("{} | {}", hud.lives_text(), hud.score_text());
    }

    fn end_frame(&mut self) {
        self.peak_sprites = self.peak_sprites.max(self.sprites_this_frame);
    }
}

struct LogAudio;

impl AudioSink for LogAudio {
    fn command(&mut self, command: AudioCommand) {
        log::debug!("audio: {command:?}");
    }
}

/// Scripted input for one frame: spin, pulse the engine, fire steadily
fn autopilot(frame: u64) -> Vec<InputEvent> {
    let mut events = Vec::new();
    match frame % 90 {
        0 => events.push(InputEvent::KeyDown(Key::Right)),
        30 => {
            events.push(InputEvent::KeyUp(Key::Right));
            events.push(InputEvent::KeyDown(Key::Up));
        }
        45 => events.push(InputEvent::KeyUp(Key::Up)),
        60 => events.push(InputEvent::KeyDown(Key::Left)),
        75 => events.push(InputEvent::KeyUp(Key::Left)),
        _ => {}
    }
    if frame.is_multiple_of(12) {
        events.push(InputEvent::KeyDown(Key::Space));
    }
    events
}

fn main() {
    env_logger::init();
    log::info!("Rock Drift (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let frames = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let viewport = Viewport::new(settings.field_width, settings.field_height);
    let mut director = Director::new(settings, seed);
    let mut sink = LogSink::default();
    let mut audio = LogAudio;

    let mut games = 0u32;
    let mut rocks_destroyed = 0u64;
    for frame in 0..frames {
        if !director.state().is_playing() {
            director.on_input(InputEvent::Click(viewport.center()), &mut audio);
            games += 1;
        }
        for event in autopilot(frame) {
            director.on_input(event, &mut audio);
        }

        // Run the fixed-period timer up to this frame's wall time
        let frame_ms = frame * 1000 / FRAMES_PER_SECOND;
        while director.clock().elapsed_ms() + director.clock().period_ms() <= frame_ms {
            director.on_timer();
        }

        for event in director.on_draw(viewport, &mut sink, &mut audio) {
            match event {
                GameEvent::RockDestroyed { .. } => rocks_destroyed += 1,
                GameEvent::LifeLost { score } => {
                    log::info!("Ship hit, {} lives left", score.lives)
                }
                GameEvent::GameOver { final_score, .. } => {
                    log::info!("Game {games} over with score {}", final_score.score)
                }
            }
        }
    }

    let hud = director.hud();
    log::info!(
        "{frames} frames, {games} games, {rocks_destroyed} rocks destroyed, peak {} sprites on screen",
        sink.peak_sprites
    );
    log::info!(
        "Current game: {} | {}, best {}",
        hud.lives_text(),
        hud.score_text(),
        hud.best_score.unwrap_or(0)
    );
}

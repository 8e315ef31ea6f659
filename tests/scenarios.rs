//! End-to-end scenarios through the public API

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use rock_drift::audio::{AudioCommand, Muted, SoundEffect};
use rock_drift::platform::{FrameRecorder, InputEvent, Key, Viewport};
use rock_drift::sim::{
    Bounds, GameEvent, GamePhase, GameState, Group, Sprite, SpriteKind, check_collisions, collide,
    spawn_rock,
};
use rock_drift::{Director, Settings};

fn field() -> Bounds {
    Bounds::new(800.0, 600.0)
}

/// A rock parked on top of the player ship
fn rock_on_player(state: &GameState, rng: &mut Pcg32) -> Sprite {
    let mut rock = spawn_rock(rng, field(), 90.0, &state.settings.rock_spawn);
    rock.pos = state.player.sprite.pos;
    rock.vel = Vec2::ZERO;
    rock.accelerating = false;
    rock
}

#[test]
fn rock_group_drops_spawns_past_capacity() {
    let mut rng = Pcg32::seed_from_u64(1);
    let mut rocks = Group::bounded(6);
    for _ in 0..10 {
        rocks.add(spawn_rock(&mut rng, field(), 90.0, &Default::default()));
    }
    assert_eq!(rocks.count(), 6);
}

#[test]
fn concentric_ship_and_rock_collide() {
    let ship = Sprite::new(SpriteKind::Ship, Vec2::splat(90.0), Vec2::new(400.0, 300.0));
    let rock = Sprite::new(SpriteKind::Rock, Vec2::splat(90.0), Vec2::new(400.0, 300.0));
    assert_eq!(ship.radius(), 45.0);
    assert!(collide(&ship, &rock));
    assert!(collide(&rock, &ship));
}

#[test]
fn missile_lives_exactly_its_lifetime() {
    let mut missile = Sprite::new(SpriteKind::Missile, Vec2::splat(10.0), Vec2::new(100.0, 100.0));
    missile.lifetime = 100;
    missile.vel = Vec2::new(6.0, 0.0);

    for tick in 1..=100 {
        let drawn = missile.update(field());
        assert!(drawn.is_some(), "missile missing on tick {tick}");
        assert!(!missile.is_expired());
    }
    assert!(missile.update(field()).is_none());
    assert!(missile.is_expired());
}

#[test]
fn three_hits_end_the_game_and_reset() {
    let mut state = GameState::new(Settings::default(), 99);
    state.start();
    state.player.fire(field());
    let mut rng = Pcg32::seed_from_u64(2);
    let mut events = Vec::new();

    for _ in 0..3 {
        let rock = rock_on_player(&state, &mut rng);
        state.rocks.add(rock);
        events.extend(check_collisions(&mut state, &mut Muted));
    }

    let lives: Vec<i32> = events
        .iter()
        .filter_map(|event| match event {
            GameEvent::LifeLost { score } => Some(score.lives),
            _ => None,
        })
        .collect();
    assert_eq!(lives, vec![2, 1, 0]);
    assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));

    assert_eq!(state.phase, GamePhase::Splash);
    assert_eq!(state.score.lives, 3);
    assert_eq!(state.score.score, 0);
    assert!(!state.rocks.exists());
    assert!(!state.player.missiles.exists());
    assert_eq!(state.player.sprite.pos, Vec2::new(400.0, 300.0));
}

#[test]
fn reset_twice_matches_reset_once() {
    let mut state = GameState::new(Settings::default(), 5);
    state.start();
    state.spawn_rock();
    state.player.fire(field());
    state.player.thrust_start();
    state.player.sprite.vel = Vec2::new(2.0, -1.0);

    state.reset();
    let once = (
        state.phase,
        state.score,
        state.rocks.count(),
        state.player.missiles.count(),
        state.player.sprite.pos,
        state.player.sprite.vel,
    );
    state.reset();
    let twice = (
        state.phase,
        state.score,
        state.rocks.count(),
        state.player.missiles.count(),
        state.player.sprite.pos,
        state.player.sprite.vel,
    );
    assert_eq!(once, twice);
}

#[test]
fn director_plays_a_scripted_session() {
    let settings = Settings {
        max_missiles: Some(4),
        ..Default::default()
    };
    let mut director = Director::new(settings, 2024);
    let viewport = Viewport::new(800.0, 600.0);
    let mut frame = FrameRecorder::default();
    let mut audio: Vec<AudioCommand> = Vec::new();

    director.on_input(InputEvent::Click(viewport.center()), &mut audio);
    director.on_input(InputEvent::KeyDown(Key::Up), &mut audio);
    director.on_input(InputEvent::KeyDown(Key::Left), &mut audio);
    assert_eq!(
        audio[..2],
        [
            AudioCommand::Play(SoundEffect::Soundtrack),
            AudioCommand::Play(SoundEffect::Thrust),
        ]
    );

    for tick in 0..1200u64 {
        director.on_timer();
        if tick % 20 == 0 {
            director.on_input(InputEvent::KeyDown(Key::Space), &mut audio);
        }
        director.on_draw(viewport, &mut frame, &mut audio);

        let state = director.state();
        assert!(state.player.missiles.count() <= 4);
        assert!(frame.sprites.iter().all(|s| viewport.contains(s.position)));
    }

    assert_eq!(frame.frames, 1200);
    assert_eq!(director.clock().elapsed_ms(), 1200 * 25);
    let hud = frame.hud.expect("hud drawn every frame");
    assert_eq!(hud.score, director.state().score.score);
}

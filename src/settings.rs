//! Game tuning
//!
//! Everything that shapes game feel lives here so it can be tweaked from a
//! JSON file without a rebuild. Missing fields fall back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::sim::Bounds;

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Maximum concurrent rocks for this preset
    pub fn max_rocks(&self) -> usize {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Normal => MAX_ROCKS,
            Difficulty::Hard => 16,
        }
    }

    /// Time between rock spawn checks
    pub fn spawn_period_ms(&self) -> u64 {
        match self {
            Difficulty::Easy => 1500,
            Difficulty::Normal => SPAWN_PERIOD_MS,
            Difficulty::Hard => 500,
        }
    }
}

/// Random ranges used when a rock spawns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RockSpawnTuning {
    /// Each velocity component is `±uniform(speed_min, speed_max)`
    pub speed_min: f32,
    pub speed_max: f32,
    /// Rotation velocity is `±uniform(0, 1) * spin_scale`
    pub spin_scale: f32,
    /// Acceleration is `uniform(0, 1) * acceleration_scale`
    pub acceleration_scale: f32,
}

impl Default for RockSpawnTuning {
    fn default() -> Self {
        Self {
            speed_min: 1.0,
            speed_max: 3.0,
            spin_scale: 0.05,
            acceleration_scale: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,

    // === Field & clock ===
    pub field_width: f32,
    pub field_height: f32,
    /// Simulated ms per periodic timer tick
    pub timer_period_ms: u64,
    /// Rock spawn check period; only fires on multiples of `timer_period_ms`
    pub spawn_period_ms: u64,

    // === Rules ===
    pub initial_lives: i32,
    pub max_rocks: usize,
    /// `None` lets the ship fire without limit
    pub max_missiles: Option<usize>,

    // === Ship ===
    pub ship_size: f32,
    pub ship_acceleration: f32,
    pub ship_friction: f32,
    pub ship_turn_rate: f32,

    // === Rocks ===
    pub rock_size: f32,
    pub rock_spawn: RockSpawnTuning,

    // === Missiles ===
    pub missile_size: f32,
    pub missile_speed: f32,
    pub missile_lifetime: u32,

    // === Explosions ===
    pub explosion_size: f32,
    pub explosion_lifetime: u32,
    /// Cells in the explosion sprite sheet
    pub explosion_frames: u32,

    // === HUD ===
    /// Show ship position/velocity/rotation readout
    pub debug_readout: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            timer_period_ms: TIMER_PERIOD_MS,
            spawn_period_ms: SPAWN_PERIOD_MS,

            initial_lives: INITIAL_LIVES,
            max_rocks: MAX_ROCKS,
            max_missiles: Some(MAX_MISSILES),

            ship_size: SHIP_SIZE,
            ship_acceleration: SHIP_ACCELERATION,
            ship_friction: SHIP_FRICTION,
            ship_turn_rate: SHIP_TURN_RATE,

            rock_size: ROCK_SIZE,
            rock_spawn: RockSpawnTuning::default(),

            missile_size: MISSILE_SIZE,
            missile_speed: MISSILE_SPEED,
            missile_lifetime: MISSILE_LIFETIME,

            explosion_size: EXPLOSION_SIZE,
            explosion_lifetime: EXPLOSION_LIFETIME,
            explosion_frames: EXPLOSION_FRAMES,

            debug_readout: false,
        }
    }
}

impl Settings {
    /// Create settings from a difficulty preset (applies preset defaults)
    pub fn from_preset(preset: Difficulty) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a difficulty preset (updates rock cap and spawn rate)
    pub fn apply_preset(&mut self, preset: Difficulty) {
        self.difficulty = preset;
        self.max_rocks = preset.max_rocks();
        self.spawn_period_ms = preset.spawn_period_ms();
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.field_width, self.field_height)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings ({}: {err})", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(
            r#"{ "initial_lives": 5, "explosion_frames": 16, "rock_spawn": { "spin_scale": 0.1 } }"#,
        )
        .unwrap();
        assert_eq!(settings.initial_lives, 5);
        assert_eq!(settings.explosion_frames, 16);
        assert_eq!(settings.explosion_lifetime, EXPLOSION_LIFETIME);
        assert_eq!(settings.rock_spawn.spin_scale, 0.1);
        assert_eq!(settings.rock_spawn.speed_max, 3.0);
        assert_eq!(settings.max_rocks, MAX_ROCKS);
    }

    #[test]
    fn test_bad_json_is_a_parse_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path().join("absent.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings::from_preset(Difficulty::Hard);
        settings.save(&path).unwrap();
        assert_eq!(Settings::try_load(&path).unwrap(), settings);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("nightmare"), None);
        let easy = Settings::from_preset(Difficulty::Easy);
        assert_eq!(easy.max_rocks, 8);
        assert_eq!(easy.spawn_period_ms, 1500);
        assert_eq!(easy.difficulty.as_str(), "Easy");
    }
}

//! Sound intents
//!
//! The simulation never plays audio itself. It emits fire-and-forget
//! [`AudioCommand`]s on state transitions and the host decides what to do
//! with them.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Engine loop while the thrust key is held
    Thrust,
    /// Missile launched
    Missile,
    /// Rock destroyed
    Explosion,
    /// Background music for a running game
    Soundtrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCommand {
    Play(SoundEffect),
    Pause(SoundEffect),
    Rewind(SoundEffect),
}

impl AudioCommand {
    pub fn effect(&self) -> SoundEffect {
        match *self {
            AudioCommand::Play(effect)
            | AudioCommand::Pause(effect)
            | AudioCommand::Rewind(effect) => effect,
        }
    }

    /// Restart a one-shot effect from the beginning
    pub fn restart(effect: SoundEffect) -> [AudioCommand; 2] {
        [AudioCommand::Rewind(effect), AudioCommand::Play(effect)]
    }

    /// Stop a looping effect and rewind it for next time
    pub fn stop(effect: SoundEffect) -> [AudioCommand; 2] {
        [AudioCommand::Pause(effect), AudioCommand::Rewind(effect)]
    }
}

/// Receives sound intents from the director. Must not block.
pub trait AudioSink {
    fn command(&mut self, command: AudioCommand);
}

/// Discards every intent
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl AudioSink for Muted {
    fn command(&mut self, _command: AudioCommand) {}
}

/// Records intents in order (handy for hosts that batch audio per frame)
impl AudioSink for Vec<AudioCommand> {
    fn command(&mut self, command: AudioCommand) {
        self.push(command);
    }
}

//! Input events delivered by the host
//!
//! Delivery is edge-triggered: one `KeyDown` when a key goes down, one
//! `KeyUp` when it comes back. Nothing here polls or debounces.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Space,
    /// Any other host key code; ignored by the game
    Other(u32),
}

/// Logical actions the ship understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
}

impl Key {
    pub fn action(&self) -> Option<Action> {
        match self {
            Key::Left => Some(Action::RotateLeft),
            Key::Right => Some(Action::RotateRight),
            Key::Up => Some(Action::Thrust),
            Key::Space => Some(Action::Fire),
            Key::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer click at canvas coordinates
    Click(Vec2),
}

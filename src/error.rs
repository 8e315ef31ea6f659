//! Error types
//!
//! The simulation itself never fails; [`InvariantViolation`] only names a
//! contract the state machine broke. Settings I/O is the one fallible edge.

use std::fmt;

/// A broken simulation contract. These are bugs, not runtime conditions:
/// the director treats any of them as an assertion failure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvariantViolation {
    ShipOutOfBounds { x: f32, y: f32 },
    RockOutOfBounds { id: u32, x: f32, y: f32 },
    MissileOutOfBounds { id: u32, x: f32, y: f32 },
    ExplosionOutOfBounds { id: u32, x: f32, y: f32 },
    NonFiniteKinematics,
    NegativeLives { lives: i32 },
    GroupOverCapacity { count: usize, max: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShipOutOfBounds { x, y } => {
                write!(f, "ship escaped the field at ({x}, {y})")
            }
            Self::RockOutOfBounds { id, x, y } => {
                write!(f, "rock {id} escaped the field at ({x}, {y})")
            }
            Self::MissileOutOfBounds { id, x, y } => {
                write!(f, "missile {id} escaped the field at ({x}, {y})")
            }
            Self::ExplosionOutOfBounds { id, x, y } => {
                write!(f, "explosion {id} escaped the field at ({x}, {y})")
            }
            Self::NonFiniteKinematics => write!(f, "non-finite position or velocity"),
            Self::NegativeLives { lives } => {
                write!(f, "lives stuck at {lives} without a reset")
            }
            Self::GroupOverCapacity { count, max } => {
                write!(f, "group holds {count} members, capacity is {max}")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Failure loading or saving a JSON settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Parse(err) => write!(f, "invalid json: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

//! Discrete landing gear positions.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of the landing gear.
///
/// Two resting states, each changed only by a command, and two timed
/// states that complete on their own once enough simulated time passes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GearState {
    /// Fully retracted and locked.
    #[default]
    UpLocked,
    /// Extending.
    TransitioningDown,
    /// Fully extended and locked.
    DownLocked,
    /// Retracting.
    TransitioningUp,
}

impl GearState {
    /// All four states, in deploy-then-retract order.
    pub const ALL: [GearState; 4] = [
        GearState::UpLocked,
        GearState::TransitioningDown,
        GearState::DownLocked,
        GearState::TransitioningUp,
    ];

    pub fn is_locked(&self) -> bool {
        !self.is_transitional()
    }
}

impl State for GearState {
    fn name(&self) -> &str {
        match self {
            Self::UpLocked => "UP_LOCKED",
            Self::TransitioningDown => "TRANSITIONING_DOWN",
            Self::DownLocked => "DOWN_LOCKED",
            Self::TransitioningUp => "TRANSITIONING_UP",
        }
    }

    fn is_transitional(&self) -> bool {
        match self {
            Self::TransitioningDown | Self::TransitioningUp => true,
            Self::UpLocked | Self::DownLocked => false,
        }
    }
}

impl fmt::Display for GearState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

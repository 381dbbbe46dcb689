//! Driver errors.

use crate::gear::GearError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("tick must be a positive, finite number of seconds, got {tick_s}")]
    InvalidTick { tick_s: f64 },

    #[error(transparent)]
    Gear(#[from] GearError),
}

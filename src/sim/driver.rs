//! Fixed-tick driver loop.

use super::error::SimError;
use crate::gear::{EventSink, GearController};
use std::thread;
use std::time::Duration;

/// Whether the driver waits out each tick in wall time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pacing {
    /// Step back to back.
    #[default]
    AsFastAsPossible,
    /// Sleep one tick after every step.
    RealTime,
}

/// Number of whole ticks that fit in `seconds`.
///
/// Partial ticks are dropped; negative or NaN durations give zero.
pub fn step_count(seconds: f64, tick_s: f64) -> usize {
    // float-to-int `as` truncates and saturates at zero
    (seconds / tick_s) as usize
}

/// Advance `gear` by `tick_s` for every whole tick in `seconds`.
///
/// Returns the number of steps taken. A tick that is not a positive,
/// finite number fails before any step runs.
pub fn run_for<K: EventSink>(
    gear: &mut GearController<K>,
    seconds: f64,
    tick_s: f64,
    pacing: Pacing,
) -> Result<usize, SimError> {
    if !tick_s.is_finite() || tick_s <= 0.0 {
        return Err(SimError::InvalidTick { tick_s });
    }

    let steps = step_count(seconds, tick_s);
    tracing::debug!(seconds, tick_s, steps, ?pacing, "running for");

    for _ in 0..steps {
        gear.advance(tick_s)?;
        if pacing == Pacing::RealTime {
            thread::sleep(Duration::from_secs_f64(tick_s));
        }
    }

    Ok(steps)
}

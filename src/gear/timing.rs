//! Transition durations.

use super::error::GearError;
use super::state::GearState;
use serde::Serialize;

pub const DEFAULT_DEPLOY_TIME_S: f64 = 2.0;
pub const DEFAULT_RETRACT_TIME_S: f64 = 2.0;

/// How long each timed transition takes, in simulated seconds.
///
/// Both durations are strictly positive and finite; the only way to get
/// a `GearTiming` is through [`GearTiming::new`] or `Default`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GearTiming {
    deploy_time_s: f64,
    retract_time_s: f64,
}

impl GearTiming {
    /// Validate and build a timing pair.
    ///
    /// ```rust
    /// use gearsim::{GearError, GearTiming};
    ///
    /// let timing = GearTiming::new(1.5, 3.0).unwrap();
    /// assert_eq!(timing.deploy_time_s(), 1.5);
    ///
    /// assert!(matches!(
    ///     GearTiming::new(0.0, 3.0),
    ///     Err(GearError::InvalidDuration { name: "deploy_time_s", .. })
    /// ));
    /// ```
    pub fn new(deploy_time_s: f64, retract_time_s: f64) -> Result<Self, GearError> {
        Ok(Self {
            deploy_time_s: positive("deploy_time_s", deploy_time_s)?,
            retract_time_s: positive("retract_time_s", retract_time_s)?,
        })
    }

    pub fn deploy_time_s(&self) -> f64 {
        self.deploy_time_s
    }

    pub fn retract_time_s(&self) -> f64 {
        self.retract_time_s
    }

    /// Duration required to complete a transitional state.
    ///
    /// Returns `None` for the locked states, which never time out.
    pub fn required_for(&self, state: GearState) -> Option<f64> {
        match state {
            GearState::TransitioningDown => Some(self.deploy_time_s),
            GearState::TransitioningUp => Some(self.retract_time_s),
            GearState::UpLocked | GearState::DownLocked => None,
        }
    }
}

impl Default for GearTiming {
    fn default() -> Self {
        Self {
            deploy_time_s: DEFAULT_DEPLOY_TIME_S,
            retract_time_s: DEFAULT_RETRACT_TIME_S,
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, GearError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GearError::InvalidDuration { name, value })
    }
}

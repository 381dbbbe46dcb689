//! Gear controller errors.

use thiserror::Error;

/// Errors raised by the gear state machine.
///
/// Rejected commands are not errors; they are reported through the
/// event sink and the returned `CommandOutcome`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GearError {
    /// A negative (or NaN) time increment was passed to `advance`.
    #[error("time increment must be non-negative, got {dt_s}")]
    InvalidArgument { dt_s: f64 },

    /// A transition duration was zero, negative or not finite.
    #[error("{name} must be a positive, finite number of seconds, got {value}")]
    InvalidDuration { name: &'static str, value: f64 },
}

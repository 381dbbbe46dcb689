//! Core State trait for state machine states.
//!
//! All state machine states implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are plain values describing the current
/// position of a machine; they never carry behaviour of their own.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition history
/// - `PartialEq`: transition logic compares states
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: states appear in reports and config
///
/// # Example
///
/// ```rust
/// use gearsim::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Closed,
///     Opening,
///     Open,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "CLOSED",
///             Self::Opening => "OPENING",
///             Self::Open => "OPEN",
///         }
///     }
///
///     fn is_transitional(&self) -> bool {
///         matches!(self, Self::Opening)
///     }
/// }
///
/// assert_eq!(DoorState::Opening.name(), "OPENING");
/// assert!(DoorState::Opening.is_transitional());
/// assert!(!DoorState::Open.is_transitional());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a timed, in-progress state.
    ///
    /// Transitional states complete on their own once enough time has
    /// been advanced; resting states only change on a command.
    ///
    /// Default implementation returns `false`.
    fn is_transitional(&self) -> bool {
        false
    }
}

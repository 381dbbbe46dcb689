//! State transition history tracking.
//!
//! Records state machine transitions against simulated time. History is
//! a value: recording returns a new history and leaves the old one alone.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single state transition.
///
/// `at_s` is the simulated time, in seconds since the machine was
/// created, at which the transition happened.
///
/// # Example
///
/// ```rust
/// use gearsim::core::StateTransition;
/// use gearsim::GearState;
///
/// let transition = StateTransition {
///     from: GearState::UpLocked,
///     to: GearState::TransitioningDown,
///     at_s: 0.0,
/// };
/// assert_eq!(transition.to, GearState::TransitioningDown);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Simulated time of the transition, in seconds
    pub at_s: f64,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use gearsim::core::{StateHistory, StateTransition};
/// use gearsim::GearState;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: GearState::UpLocked,
///         to: GearState::TransitioningDown,
///         at_s: 0.0,
///     })
///     .record(StateTransition {
///         from: GearState::TransitioningDown,
///         to: GearState::DownLocked,
///         at_s: 2.0,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(history.span_s(), Some(2.0));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is not modified.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Record a transition in place.
    ///
    /// Used by machines that own their history and never share it.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of every transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Simulated time between the first and last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn span_s(&self) -> Option<f64> {
        match (self.transitions.first(), self.transitions.last()) {
            (Some(first), Some(last)) => Some(last.at_s - first.at_s),
            _ => None,
        }
    }

    /// Get all transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

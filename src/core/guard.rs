//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether a command may
//! start a transition from the current state.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use gearsim::core::Guard;
/// use gearsim::GearState;
///
/// let only_when_stowed = Guard::new(|s: &GearState| matches!(s, GearState::UpLocked));
///
/// assert!(only_when_stowed.check(&GearState::UpLocked));
/// assert!(!only_when_stowed.check(&GearState::TransitioningDown));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that passes only for a single, exact state.
    pub fn only(expected: S) -> Self
    where
        S: 'static,
    {
        Self::new(move |s| *s == expected)
    }

    /// Check if the guard allows transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

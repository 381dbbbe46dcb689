//! Core state machine types.
//!
//! This module contains the generic, pure building blocks:
//! - State definitions via the `State` trait
//! - Guard predicates for transition control
//! - History of transitions against simulated time
//!
//! Nothing in here performs I/O or reads a clock.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;

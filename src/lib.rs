//! Gearsim: a discrete-time landing gear control simulator
//!
//! The heart of the crate is a small, pure state machine: the gear is
//! `UpLocked`, `TransitioningDown`, `DownLocked` or `TransitioningUp`.
//! Commands start timed transitions when their guard holds; advancing
//! simulated time completes them. Nothing in the machine reads a clock,
//! performs I/O or touches global state; events go to an injected sink.
//!
//! # Core Concepts
//!
//! - **State**: `GearState`, a closed enum implementing the `State` trait
//! - **Guards**: pure predicates deciding whether a command is accepted
//! - **Events**: `[STATE] message` audit records delivered to an `EventSink`
//! - **History**: every state change stamped with simulated time
//!
//! # Example
//!
//! ```rust
//! use gearsim::{GearController, GearEvent, GearState, GearTiming};
//!
//! let mut gear = GearController::new(GearTiming::default(), Vec::<GearEvent>::new());
//!
//! // retracting gear that is already up is rejected, not an error
//! gear.command_gear_up();
//! assert_eq!(gear.state(), GearState::UpLocked);
//!
//! gear.command_gear_down();
//! gear.advance(0.5).unwrap();
//! assert_eq!(gear.transition_elapsed_s(), Some(0.5));
//!
//! gear.advance(1.5).unwrap();
//! assert_eq!(gear.state(), GearState::DownLocked);
//!
//! let log: Vec<String> = gear.sink().iter().map(|e| e.to_string()).collect();
//! assert_eq!(log, [
//!     "[UP_LOCKED] Command rejected",
//!     "[TRANSITIONING_DOWN] Gear deploying",
//!     "[DOWN_LOCKED] Gear locked down",
//! ]);
//! ```

pub mod config;
pub mod core;
pub mod gear;
pub mod logging;
pub mod sim;

// Re-export commonly used types
pub use config::SimConfig;
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use gear::{
    CommandOutcome, EventKind, EventSink, GearCommand, GearController, GearError, GearEvent,
    GearState, GearTiming, NullSink, TracingSink,
};
pub use sim::{run_for, run_scenario, Pacing, ScenarioReport, SimError};

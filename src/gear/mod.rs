//! Landing gear state machine.
//!
//! Four states, two commands and a time-advance operation:
//!
//! | From | Trigger | To |
//! |---|---|---|
//! | `UpLocked` | gear down | `TransitioningDown` |
//! | `TransitioningDown` | elapsed ≥ deploy time | `DownLocked` |
//! | `DownLocked` | gear up | `TransitioningUp` |
//! | `TransitioningUp` | elapsed ≥ retract time | `UpLocked` |
//!
//! Any other command is rejected without a state change and reported
//! through the [`EventSink`].

mod command;
mod controller;
mod error;
mod event;
mod state;
mod timing;

pub use command::{CommandOutcome, CommandRule, CommandTable, GearCommand};
pub use controller::GearController;
pub use error::GearError;
pub use event::{EventKind, EventSink, GearEvent, NullSink, TracingSink};
pub use state::GearState;
pub use timing::{GearTiming, DEFAULT_DEPLOY_TIME_S, DEFAULT_RETRACT_TIME_S};

//! Audit events emitted by the gear controller, and the sinks that
//! receive them.

use super::command::GearCommand;
use super::state::GearState;
use crate::core::State;
use serde::Serialize;
use std::fmt;

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EventKind {
    Deploying,
    LockedDown,
    Retracting,
    LockedUp,
    /// A command arrived while its guard was false.
    CommandRejected(GearCommand),
}

impl EventKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Deploying => "Gear deploying",
            Self::LockedDown => "Gear locked down",
            Self::Retracting => "Gear retracting",
            Self::LockedUp => "Gear locked up",
            Self::CommandRejected(_) => "Command rejected",
        }
    }
}

/// A single audit record.
///
/// `state` is the state *after* the event; for a rejection that is the
/// unchanged current state. Displays as `[<STATE_NAME>] <message>`.
///
/// ```rust
/// use gearsim::{EventKind, GearEvent, GearState};
///
/// let event = GearEvent::new(GearState::DownLocked, EventKind::LockedDown);
/// assert_eq!(event.to_string(), "[DOWN_LOCKED] Gear locked down");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GearEvent {
    pub state: GearState,
    pub kind: EventKind,
}

impl GearEvent {
    pub fn new(state: GearState, kind: EventKind) -> Self {
        Self { state, kind }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self.kind, EventKind::CommandRejected(_))
    }
}

impl fmt::Display for GearEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.state.name(), self.kind.message())
    }
}

/// Receiver for controller events.
///
/// The controller never performs I/O; everything observable goes
/// through the sink it was constructed with.
pub trait EventSink {
    fn emit(&mut self, event: GearEvent);
}

/// Collects events in memory.
impl EventSink for Vec<GearEvent> {
    fn emit(&mut self, event: GearEvent) {
        self.push(event);
    }
}

impl<K: EventSink + ?Sized> EventSink for &mut K {
    fn emit(&mut self, event: GearEvent) {
        (**self).emit(event);
    }
}

impl<K: EventSink + ?Sized> EventSink for Box<K> {
    fn emit(&mut self, event: GearEvent) {
        (**self).emit(event);
    }
}

/// Forwards every event to `tracing` at INFO under the `gearsim::gear`
/// target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: GearEvent) {
        match event.kind {
            EventKind::CommandRejected(command) => tracing::info!(
                target: "gearsim::gear",
                state = event.state.name(),
                command = command.name(),
                "{event}"
            ),
            _ => tracing::info!(target: "gearsim::gear", state = event.state.name(), "{event}"),
        }
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GearEvent) {}
}

//! Pilot commands and the guard table that decides them.

use super::event::EventKind;
use super::state::GearState;
use crate::core::Guard;
use serde::Serialize;

/// A request to move the gear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GearCommand {
    GearDown,
    GearUp,
}

impl GearCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GearDown => "GEAR_DOWN",
            Self::GearUp => "GEAR_UP",
        }
    }
}

/// Result of resolving a command against the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The guard held and a timed transition started.
    Accepted { from: GearState, to: GearState },
    /// The guard failed; the state is unchanged.
    Rejected { state: GearState },
}

impl CommandOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// State the machine is in after the command.
    pub fn state(&self) -> GearState {
        match *self {
            Self::Accepted { to, .. } => to,
            Self::Rejected { state } => state,
        }
    }
}

/// One row of the command table: the guard that must hold, and the
/// transition it starts.
#[derive(Debug)]
pub struct CommandRule {
    pub guard: Guard<GearState>,
    pub to: GearState,
    pub event: EventKind,
}

impl CommandRule {
    /// Check if this rule can fire from the current state (pure).
    pub fn can_execute(&self, current: &GearState) -> bool {
        self.guard.check(current)
    }
}

/// Guard-and-reject table for the two gear commands.
///
/// Every command has exactly one rule; a command whose guard fails is
/// rejected with no state change.
#[derive(Debug)]
pub struct CommandTable {
    gear_down: CommandRule,
    gear_up: CommandRule,
}

impl CommandTable {
    pub fn new() -> Self {
        Self {
            gear_down: CommandRule {
                guard: Guard::only(GearState::UpLocked),
                to: GearState::TransitioningDown,
                event: EventKind::Deploying,
            },
            gear_up: CommandRule {
                guard: Guard::only(GearState::DownLocked),
                to: GearState::TransitioningUp,
                event: EventKind::Retracting,
            },
        }
    }

    pub fn rule(&self, command: GearCommand) -> &CommandRule {
        match command {
            GearCommand::GearDown => &self.gear_down,
            GearCommand::GearUp => &self.gear_up,
        }
    }

    /// Resolve `command` issued in `current` into an outcome and the event
    /// that records it. Pure; the caller applies the result.
    pub fn resolve(&self, current: GearState, command: GearCommand) -> (CommandOutcome, EventKind) {
        let rule = self.rule(command);
        if rule.can_execute(&current) {
            (
                CommandOutcome::Accepted {
                    from: current,
                    to: rule.to,
                },
                rule.event,
            )
        } else {
            (
                CommandOutcome::Rejected { state: current },
                EventKind::CommandRejected(command),
            )
        }
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gear_down_only_from_up_locked() {
        let table = CommandTable::new();

        for state in GearState::ALL {
            let (outcome, event) = table.resolve(state, GearCommand::GearDown);
            if state == GearState::UpLocked {
                assert_eq!(
                    outcome,
                    CommandOutcome::Accepted {
                        from: GearState::UpLocked,
                        to: GearState::TransitioningDown
                    }
                );
                assert_eq!(event, EventKind::Deploying);
            } else {
                assert_eq!(outcome, CommandOutcome::Rejected { state });
                assert_eq!(event, EventKind::CommandRejected(GearCommand::GearDown));
            }
        }
    }

    #[test]
    fn gear_up_only_from_down_locked() {
        let table = CommandTable::new();

        for state in GearState::ALL {
            let (outcome, event) = table.resolve(state, GearCommand::GearUp);
            if state == GearState::DownLocked {
                assert_eq!(outcome.state(), GearState::TransitioningUp);
                assert_eq!(event, EventKind::Retracting);
            } else {
                assert!(!outcome.is_accepted());
                assert_eq!(outcome.state(), state);
                assert_eq!(event, EventKind::CommandRejected(GearCommand::GearUp));
            }
        }
    }

    #[test]
    fn accepted_commands_always_enter_a_transitional_state() {
        let table = CommandTable::new();
        for command in [GearCommand::GearDown, GearCommand::GearUp] {
            let rule = table.rule(command);
            assert!(GearState::ALL
                .iter()
                .filter(|s| rule.can_execute(s))
                .all(|s| s.is_locked()));
            assert!(!rule.to.is_locked());
        }
    }
}

//! The landing gear state machine.

use super::command::{CommandOutcome, CommandTable, GearCommand};
use super::error::GearError;
use super::event::{EventKind, EventSink, GearEvent};
use super::state::GearState;
use super::timing::GearTiming;
use crate::core::{State, StateHistory, StateTransition};

/// Discrete-time landing gear controller.
///
/// Starts in `UpLocked`. Commands start timed transitions when their
/// guard holds; [`advance`](Self::advance) completes them once enough
/// simulated time has accumulated. Every state change and every
/// rejected command is reported to the sink.
///
/// ```rust
/// use gearsim::{GearController, GearEvent, GearState, GearTiming};
///
/// let timing = GearTiming::new(1.0, 1.0).unwrap();
/// let mut gear = GearController::new(timing, Vec::<GearEvent>::new());
///
/// gear.command_gear_down();
/// assert_eq!(gear.state(), GearState::TransitioningDown);
///
/// gear.advance(1.01).unwrap();
/// assert_eq!(gear.state(), GearState::DownLocked);
/// assert_eq!(gear.sink().len(), 2);
/// ```
#[derive(Debug)]
pub struct GearController<K: EventSink> {
    state: GearState,
    timing: GearTiming,
    transition_elapsed_s: f64,
    sim_time_s: f64,
    history: StateHistory<GearState>,
    commands: CommandTable,
    sink: K,
}

impl<K: EventSink> GearController<K> {
    pub fn new(timing: GearTiming, sink: K) -> Self {
        Self {
            state: GearState::UpLocked,
            timing,
            transition_elapsed_s: 0.0,
            sim_time_s: 0.0,
            history: StateHistory::new(),
            commands: CommandTable::new(),
            sink,
        }
    }

    pub fn state(&self) -> GearState {
        self.state
    }

    pub fn timing(&self) -> &GearTiming {
        &self.timing
    }

    /// Time spent in the current transition.
    ///
    /// `None` while locked: the counter is only meaningful mid-transition.
    pub fn transition_elapsed_s(&self) -> Option<f64> {
        self.state
            .is_transitional()
            .then_some(self.transition_elapsed_s)
    }

    /// Total simulated time consumed by `advance` so far.
    pub fn sim_time_s(&self) -> f64 {
        self.sim_time_s
    }

    /// Every state change so far.
    ///
    /// Grows by four entries per deploy and retract cycle and is never
    /// trimmed; a long-running driver should drain it with
    /// [`take_history`](Self::take_history).
    pub fn history(&self) -> &StateHistory<GearState> {
        &self.history
    }

    /// Hand over the recorded history, leaving an empty one behind.
    pub fn take_history(&mut self) -> StateHistory<GearState> {
        std::mem::take(&mut self.history)
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Begin deployment. Only effective from `UpLocked`.
    pub fn command_gear_down(&mut self) -> CommandOutcome {
        self.command(GearCommand::GearDown)
    }

    /// Begin retraction. Only effective from `DownLocked`.
    pub fn command_gear_up(&mut self) -> CommandOutcome {
        self.command(GearCommand::GearUp)
    }

    /// Apply a command. A failed guard is reported, not returned as an error.
    pub fn command(&mut self, command: GearCommand) -> CommandOutcome {
        let (outcome, event) = self.commands.resolve(self.state, command);
        if let CommandOutcome::Accepted { to, .. } = outcome {
            self.enter(to);
            self.transition_elapsed_s = 0.0;
        }
        self.emit(event);
        outcome
    }

    /// Advance simulated time by `dt_s` seconds.
    ///
    /// Completes the current transition if its duration has been reached.
    /// Time beyond the threshold is discarded, so one call completes at
    /// most one transition. Returns the locked state entered, if any.
    ///
    /// A negative or NaN `dt_s` fails with [`GearError::InvalidArgument`]
    /// and leaves the controller untouched.
    pub fn advance(&mut self, dt_s: f64) -> Result<Option<GearState>, GearError> {
        if dt_s.is_nan() || dt_s < 0.0 {
            return Err(GearError::InvalidArgument { dt_s });
        }

        self.sim_time_s += dt_s;

        let Some(required_s) = self.timing.required_for(self.state) else {
            return Ok(None);
        };

        self.transition_elapsed_s += dt_s;
        if self.transition_elapsed_s < required_s {
            return Ok(None);
        }

        let (locked, event) = match self.state {
            GearState::TransitioningDown => (GearState::DownLocked, EventKind::LockedDown),
            GearState::TransitioningUp => (GearState::UpLocked, EventKind::LockedUp),
            GearState::UpLocked | GearState::DownLocked => return Ok(None),
        };
        self.enter(locked);
        self.emit(event);
        Ok(Some(locked))
    }

    fn enter(&mut self, to: GearState) {
        self.history.push(StateTransition {
            from: self.state,
            to,
            at_s: self.sim_time_s,
        });
        self.state = to;
    }

    fn emit(&mut self, kind: EventKind) {
        self.sink.emit(GearEvent::new(self.state, kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(deploy: f64, retract: f64) -> GearController<Vec<GearEvent>> {
        GearController::new(GearTiming::new(deploy, retract).unwrap(), Vec::new())
    }

    fn messages(gear: &GearController<Vec<GearEvent>>) -> Vec<String> {
        gear.sink().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn starts_up_locked_with_no_history() {
        let gear = controller(2.0, 2.0);
        assert_eq!(gear.state(), GearState::UpLocked);
        assert_eq!(gear.transition_elapsed_s(), None);
        assert!(gear.history().is_empty());
        assert!(gear.sink().is_empty());
    }

    #[test]
    fn deploy_reaches_down_locked_after_deploy_time() {
        let mut gear = controller(1.0, 1.0);

        let outcome = gear.command_gear_down();
        assert!(outcome.is_accepted());
        assert_eq!(gear.state(), GearState::TransitioningDown);

        assert_eq!(gear.advance(1.01), Ok(Some(GearState::DownLocked)));
        assert_eq!(gear.state(), GearState::DownLocked);
        assert_eq!(
            messages(&gear),
            vec!["[TRANSITIONING_DOWN] Gear deploying", "[DOWN_LOCKED] Gear locked down"]
        );
    }

    #[test]
    fn retract_reaches_up_locked_after_retract_time() {
        let mut gear = controller(1.0, 1.0);
        gear.command_gear_down();
        gear.advance(1.01).unwrap();

        gear.command_gear_up();
        assert_eq!(gear.state(), GearState::TransitioningUp);

        gear.advance(1.01).unwrap();
        assert_eq!(gear.state(), GearState::UpLocked);
        assert_eq!(
            messages(&gear)[2..],
            ["[TRANSITIONING_UP] Gear retracting", "[UP_LOCKED] Gear locked up"]
        );
    }

    #[test]
    fn rejects_gear_up_when_already_up() {
        let mut gear = GearController::new(GearTiming::default(), Vec::<GearEvent>::new());

        let outcome = gear.command_gear_up();

        assert_eq!(
            outcome,
            CommandOutcome::Rejected {
                state: GearState::UpLocked
            }
        );
        assert_eq!(gear.state(), GearState::UpLocked);
        assert_eq!(gear.sink().len(), 1);
        assert_eq!(gear.sink()[0].to_string(), "[UP_LOCKED] Command rejected");
        assert!(gear.history().is_empty());
    }

    #[test]
    fn rejects_gear_down_outside_up_locked() {
        let mut gear = controller(2.0, 2.0);
        gear.command_gear_down();

        // mid-deploy
        assert!(!gear.command_gear_down().is_accepted());
        assert_eq!(gear.state(), GearState::TransitioningDown);

        gear.advance(2.0).unwrap();
        assert!(!gear.command_gear_down().is_accepted());
        assert_eq!(gear.state(), GearState::DownLocked);

        gear.command_gear_up();
        assert!(!gear.command_gear_down().is_accepted());
        assert_eq!(gear.state(), GearState::TransitioningUp);

        let rejections = gear.sink().iter().filter(|e| e.is_rejection()).count();
        assert_eq!(rejections, 3);
    }

    #[test]
    fn rejected_command_does_not_reset_transition_timer() {
        let mut gear = controller(2.0, 2.0);
        gear.command_gear_down();
        gear.advance(1.5).unwrap();

        gear.command_gear_down();

        assert_eq!(gear.transition_elapsed_s(), Some(1.5));
    }

    #[test]
    fn partial_steps_accumulate_until_threshold() {
        let mut gear = controller(2.0, 2.0);
        gear.command_gear_down();

        gear.advance(0.5).unwrap();
        assert_eq!(gear.state(), GearState::TransitioningDown);
        assert_eq!(gear.transition_elapsed_s(), Some(0.5));

        gear.advance(0.5).unwrap();
        assert_eq!(gear.state(), GearState::TransitioningDown);
        assert_eq!(gear.transition_elapsed_s(), Some(1.0));

        gear.advance(1.0).unwrap();
        assert_eq!(gear.state(), GearState::DownLocked);
    }

    #[test]
    fn negative_advance_fails_without_side_effects() {
        let mut gear = controller(2.0, 2.0);
        gear.command_gear_down();
        gear.advance(0.75).unwrap();
        let events_before = gear.sink().len();

        let err = gear.advance(-0.1).unwrap_err();

        assert_eq!(err, GearError::InvalidArgument { dt_s: -0.1 });
        assert_eq!(gear.state(), GearState::TransitioningDown);
        assert_eq!(gear.transition_elapsed_s(), Some(0.75));
        assert_eq!(gear.sim_time_s(), 0.75);
        assert_eq!(gear.sink().len(), events_before);
    }

    #[test]
    fn nan_advance_is_rejected() {
        let mut gear = controller(2.0, 2.0);
        assert!(matches!(
            gear.advance(f64::NAN),
            Err(GearError::InvalidArgument { .. })
        ));
        assert_eq!(gear.sim_time_s(), 0.0);
    }

    #[test]
    fn overshoot_completes_exactly_one_transition() {
        let mut gear = controller(1.0, 1.0);
        gear.command_gear_down();

        assert_eq!(gear.advance(1_000.0), Ok(Some(GearState::DownLocked)));
        assert_eq!(gear.state(), GearState::DownLocked);

        gear.command_gear_up();
        assert_eq!(gear.transition_elapsed_s(), Some(0.0));
    }

    #[test]
    fn advance_while_locked_is_a_no_op() {
        let mut gear = controller(1.0, 1.0);
        for _ in 0..10 {
            assert_eq!(gear.advance(5.0), Ok(None));
        }
        assert_eq!(gear.state(), GearState::UpLocked);
        assert!(gear.sink().is_empty());
        assert_eq!(gear.sim_time_s(), 50.0);
    }

    #[test]
    fn zero_advance_is_allowed() {
        let mut gear = controller(1.0, 1.0);
        gear.command_gear_down();
        assert_eq!(gear.advance(0.0), Ok(None));
        assert_eq!(gear.transition_elapsed_s(), Some(0.0));
    }

    #[test]
    fn history_records_simulated_time_of_each_change() {
        let mut gear = controller(1.0, 2.0);
        gear.advance(0.5).unwrap();
        gear.command_gear_down();
        gear.advance(1.0).unwrap();
        gear.command_gear_up();
        gear.advance(2.0).unwrap();

        let times: Vec<f64> = gear.history().transitions().iter().map(|t| t.at_s).collect();
        assert_eq!(times, vec![0.5, 1.5, 1.5, 3.5]);
        assert_eq!(
            gear.history().get_path(),
            vec![
                &GearState::UpLocked,
                &GearState::TransitioningDown,
                &GearState::DownLocked,
                &GearState::TransitioningUp,
                &GearState::UpLocked,
            ]
        );
    }

    #[test]
    fn borrowed_sink_leaves_events_with_caller() {
        let mut events: Vec<GearEvent> = Vec::new();
        {
            let mut gear = GearController::new(GearTiming::default(), &mut events);
            gear.command_gear_down();
        }
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Deploying);
    }

    #[test]
    fn history_grows_per_cycle_until_taken() {
        let mut gear = controller(1.0, 1.0);
        for _ in 0..3 {
            gear.command_gear_down();
            gear.advance(1.0).unwrap();
            gear.command_gear_up();
            gear.advance(1.0).unwrap();
        }
        assert_eq!(gear.history().len(), 12);

        let taken = gear.take_history();

        assert_eq!(taken.len(), 12);
        assert!(gear.history().is_empty());
        assert_eq!(gear.state(), GearState::UpLocked);
        assert_eq!(gear.sim_time_s(), 6.0);

        gear.command_gear_down();
        let transitions = gear.history().transitions();
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].at_s, 6.0);
    }
}

//! Deploy-then-retract demonstration sequence.

use super::driver::{run_for, Pacing};
use super::error::SimError;
use crate::core::StateHistory;
use crate::gear::{CommandOutcome, EventSink, GearController, GearState};
use serde::Serialize;

/// Extra time each phase runs past its nominal duration, in seconds.
pub const SETTLE_MARGIN_S: f64 = 1.0;

/// Summary of a completed scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub final_state: GearState,
    pub deploy_steps: usize,
    pub retract_steps: usize,
    pub sim_time_s: f64,
    pub history: StateHistory<GearState>,
}

impl ScenarioReport {
    pub fn total_steps(&self) -> usize {
        self.deploy_steps + self.retract_steps
    }
}

/// Command the gear down, run past the deploy time, then command it up
/// and run past the retract time.
///
/// Each phase runs for its transition duration plus [`SETTLE_MARGIN_S`].
/// A rejected command does not stop the scenario; it is logged by the
/// controller's sink and the phase runs anyway.
pub fn run_scenario<K: EventSink>(
    gear: &mut GearController<K>,
    tick_s: f64,
    pacing: Pacing,
) -> Result<ScenarioReport, SimError> {
    let timing = *gear.timing();

    let outcome = gear.command_gear_down();
    log_outcome("gear down", outcome);
    let deploy_steps = run_for(
        gear,
        timing.deploy_time_s() + SETTLE_MARGIN_S,
        tick_s,
        pacing,
    )?;

    let outcome = gear.command_gear_up();
    log_outcome("gear up", outcome);
    let retract_steps = run_for(
        gear,
        timing.retract_time_s() + SETTLE_MARGIN_S,
        tick_s,
        pacing,
    )?;

    Ok(ScenarioReport {
        final_state: gear.state(),
        deploy_steps,
        retract_steps,
        sim_time_s: gear.sim_time_s(),
        history: gear.history().clone(),
    })
}

fn log_outcome(phase: &str, outcome: CommandOutcome) {
    if !outcome.is_accepted() {
        tracing::warn!(phase, state = %outcome.state(), "phase started without a transition");
    }
}

//! Gearsim binary.
//!
//! Loads the configuration, sets up logging, and runs one deploy and
//! retract cycle of the landing gear.

mod cli;

use anyhow::Context;
use clap::Parser;
use gearsim::{logging, run_scenario, GearController, SimConfig, TracingSink};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = SimConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
        config = config.validated()?;
    }

    // Held until exit so buffered file records are flushed
    let _log_guard = logging::init_logging(&config.log_options())?;

    tracing::info!("gearsim v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        deploy_time_s = config.deploy_time_s,
        retract_time_s = config.retract_time_s,
        tick_s = config.tick_s,
        sleep_enabled = config.sleep_enabled,
        "configuration loaded"
    );

    let mut gear = GearController::new(config.timing()?, TracingSink);
    let report = run_scenario(&mut gear, config.tick_s, config.pacing())?;

    tracing::info!(
        final_state = %report.final_state,
        steps = report.total_steps(),
        sim_time_s = report.sim_time_s,
        transitions = report.history.len(),
        "simulation complete"
    );

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

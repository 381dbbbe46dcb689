//! Simulation driver: the loop that feeds ticks and commands to a
//! [`GearController`](crate::GearController).

mod driver;
mod error;
mod scenario;

pub use driver::{run_for, step_count, Pacing};
pub use error::SimError;
pub use scenario::{run_scenario, ScenarioReport, SETTLE_MARGIN_S};

//! Simulation configuration.
//!
//! Loaded from a JSON file whose keys override the defaults below. A
//! missing file is not an error; the defaults are used as-is.
//!
//! ```json
//! {
//!   "deploy_time_s": 2.0,
//!   "retract_time_s": 2.0,
//!   "tick_s": 0.25,
//!   "sleep_enabled": false,
//!   "log_file": "lgcs.log",
//!   "log_level": "INFO",
//!   "log_to_console": true
//! }
//! ```

use crate::gear::{GearError, GearTiming, DEFAULT_DEPLOY_TIME_S, DEFAULT_RETRACT_TIME_S};
use crate::logging::LogOptions;
use crate::sim::Pacing;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub mod error;
pub mod validation;

pub use error::ConfigError;
pub use validation::{validate, ConfigViolation};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_TICK_S: f64 = 0.25;

/// Everything the simulator binary needs to run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Time for the gear to extend, in seconds
    pub deploy_time_s: f64,

    /// Time for the gear to retract, in seconds
    pub retract_time_s: f64,

    /// Fixed simulation step, in seconds
    pub tick_s: f64,

    /// Sleep one tick of wall time after each step
    pub sleep_enabled: bool,

    /// Log file path; parent directories are created on startup
    pub log_file: PathBuf,

    /// Log level name (`trace`, `debug`, `info`, `warn`, `error`)
    pub log_level: String,

    /// Also log to stderr
    pub log_to_console: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            deploy_time_s: DEFAULT_DEPLOY_TIME_S,
            retract_time_s: DEFAULT_RETRACT_TIME_S,
            tick_s: DEFAULT_TICK_S,
            sleep_enabled: false,
            log_file: PathBuf::from("lgcs.log"),
            log_level: "INFO".to_string(),
            log_to_console: true,
        }
    }
}

impl SimConfig {
    /// Load and validate a configuration file.
    ///
    /// Falls back to defaults when `path` does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validated()
    }

    /// Check every field, reporting all violations at once.
    pub fn validated(self) -> Result<Self, ConfigError> {
        validate(&self).map_err(ConfigError::Invalid)?;
        Ok(self)
    }

    pub fn timing(&self) -> Result<GearTiming, GearError> {
        GearTiming::new(self.deploy_time_s, self.retract_time_s)
    }

    pub fn pacing(&self) -> Pacing {
        if self.sleep_enabled {
            Pacing::RealTime
        } else {
            Pacing::AsFastAsPossible
        }
    }

    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            file: self.log_file.clone(),
            level: self.log_level.clone(),
            console: self.log_to_console,
        }
    }
}

//! Configuration checks using Validation.
//!
//! Every check runs and every violation is reported, so a config file
//! with three mistakes produces three messages in one pass.

use super::SimConfig;
use crate::logging::parse_level;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem found in a configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("{field} must be a positive, finite number of seconds (got {value})")]
    NonPositiveDuration { field: &'static str, value: f64 },

    #[error("log_level '{level}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel { level: String },

    #[error("log_file must not be empty")]
    EmptyLogFile,
}

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn positive_seconds(field: &'static str, value: f64) -> Check {
    if value.is_finite() && value > 0.0 {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::NonPositiveDuration { field, value })
    }
}

fn known_level(level: &str) -> Check {
    if parse_level(level).is_some() {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::UnknownLogLevel {
            level: level.to_string(),
        })
    }
}

fn non_empty_log_file(config: &SimConfig) -> Check {
    if config.log_file.as_os_str().is_empty() {
        Validation::fail(ConfigViolation::EmptyLogFile)
    } else {
        Validation::success(())
    }
}

/// Run all checks, accumulating ALL violations.
pub fn validate(config: &SimConfig) -> Result<(), Vec<ConfigViolation>> {
    let checks: Vec<Check> = vec![
        positive_seconds("deploy_time_s", config.deploy_time_s),
        positive_seconds("retract_time_s", config.retract_time_s),
        positive_seconds("tick_s", config.tick_s),
        known_level(&config.log_level),
        non_empty_log_file(config),
    ];

    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_pass() {
        assert_eq!(validate(&SimConfig::default()), Ok(()));
    }

    #[test]
    fn accumulates_all_violations() {
        let config = SimConfig {
            deploy_time_s: 0.0,
            retract_time_s: -1.0,
            tick_s: f64::NAN,
            log_level: "LOUD".to_string(),
            log_file: PathBuf::new(),
            ..SimConfig::default()
        };

        let violations = validate(&config).unwrap_err();

        assert_eq!(violations.len(), 5);
        assert!(violations.contains(&ConfigViolation::NonPositiveDuration {
            field: "deploy_time_s",
            value: 0.0
        }));
        assert!(violations.contains(&ConfigViolation::NonPositiveDuration {
            field: "retract_time_s",
            value: -1.0
        }));
        assert!(violations
            .iter()
            .any(|v| matches!(v, ConfigViolation::NonPositiveDuration { field: "tick_s", .. })));
        assert!(violations.contains(&ConfigViolation::UnknownLogLevel {
            level: "LOUD".to_string()
        }));
        assert!(violations.contains(&ConfigViolation::EmptyLogFile));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        for level in ["INFO", "debug", "Warning", "ERROR", "critical", "trace"] {
            let config = SimConfig {
                log_level: level.to_string(),
                ..SimConfig::default()
            };
            assert_eq!(validate(&config), Ok(()), "{level}");
        }
    }
}

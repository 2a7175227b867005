// ABOUTME: Environment configuration for the form coach session runtime and CLI
// ABOUTME: Reads typed settings from FORM_COACH_* variables and rejects values that fail to parse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use super::error::ConfigError;
use form_core::constants::{defaults, env_config, timing};
use form_intelligence::HoldTimerPolicy;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Form coach configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachConfig {
    /// External catalog merged over the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Exercise selected when the caller names none
    pub default_exercise: String,
    /// Elapsed-time behavior when a hold is interrupted
    pub hold_timer_policy: HoldTimerPolicy,
    /// Wall-clock period of hold timer ticks
    pub tick_interval: Duration,
    /// Frames allowed to wait while one is being evaluated
    pub frame_queue_depth: usize,
    /// Log every published snapshot at debug level
    pub snapshot_log: bool,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_exercise: defaults::DEFAULT_EXERCISE.to_owned(),
            hold_timer_policy: HoldTimerPolicy::default(),
            tick_interval: Duration::from_millis(timing::DEFAULT_TICK_INTERVAL_MS),
            frame_queue_depth: timing::DEFAULT_FRAME_QUEUE_DEPTH,
            snapshot_log: false,
        }
    }
}

impl CoachConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is present but invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!(
            default_exercise = %config.default_exercise,
            policy = config.hold_timer_policy.as_str(),
            tick_ms = config.tick_interval.as_millis(),
            queue_depth = config.frame_queue_depth,
            catalog = ?config.catalog_path,
            "Form coach configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is present but invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog_path = lookup(env_config::CATALOG_PATH)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let default_exercise = match lookup(env_config::DEFAULT_EXERCISE) {
            Some(key) if key.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    key: env_config::DEFAULT_EXERCISE,
                })
            }
            Some(key) => key.trim().to_owned(),
            None => defaults.default_exercise,
        };

        let hold_timer_policy = match lookup(env_config::HOLD_TIMER_POLICY) {
            Some(raw) => HoldTimerPolicy::parse(&raw).ok_or(ConfigError::Parse {
                key: env_config::HOLD_TIMER_POLICY,
                value: raw,
                expected: "resume or reset",
            })?,
            None => defaults.hold_timer_policy,
        };

        let tick_interval = lookup(env_config::TICK_INTERVAL_MS)
            .map(|raw| parse_positive::<u64>(env_config::TICK_INTERVAL_MS, &raw))
            .transpose()?
            .map_or(defaults.tick_interval, Duration::from_millis);

        let frame_queue_depth = lookup(env_config::FRAME_QUEUE_DEPTH)
            .map(|raw| parse_positive::<usize>(env_config::FRAME_QUEUE_DEPTH, &raw))
            .transpose()?
            .unwrap_or(defaults.frame_queue_depth);

        let snapshot_log = lookup(env_config::SNAPSHOT_LOG)
            .map(|raw| parse_bool(env_config::SNAPSHOT_LOG, &raw))
            .transpose()?
            .unwrap_or(defaults.snapshot_log);

        Ok(Self {
            catalog_path,
            default_exercise,
            hold_timer_policy,
            tick_interval,
            frame_queue_depth,
            snapshot_log,
        })
    }
}

/// Parse an unsigned integer that must be greater than zero
fn parse_positive<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr + Default + PartialEq,
{
    let value: T = raw.trim().parse().map_err(|_| ConfigError::Parse {
        key,
        value: raw.to_owned(),
        expected: "a positive integer",
    })?;
    if value == T::default() {
        return Err(ConfigError::MustBePositive { key });
    }
    Ok(value)
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Parse {
            key,
            value: raw.to_owned(),
            expected: "true or false",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CoachConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CoachConfig::default());
        assert_eq!(config.default_exercise, "pushup");
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.frame_queue_depth, 1);
    }

    #[test]
    fn test_overrides_parse() {
        let config = CoachConfig::from_lookup(lookup(&[
            (env_config::DEFAULT_EXERCISE, "plank"),
            (env_config::HOLD_TIMER_POLICY, "Reset"),
            (env_config::TICK_INTERVAL_MS, "250"),
            (env_config::FRAME_QUEUE_DEPTH, "4"),
            (env_config::SNAPSHOT_LOG, "yes"),
            (env_config::CATALOG_PATH, "/etc/form-coach/catalog.yaml"),
        ]))
        .unwrap();

        assert_eq!(config.default_exercise, "plank");
        assert_eq!(config.hold_timer_policy, HoldTimerPolicy::Reset);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert_eq!(config.frame_queue_depth, 4);
        assert!(config.snapshot_log);
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/form-coach/catalog.yaml"))
        );
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let err =
            CoachConfig::from_lookup(lookup(&[(env_config::TICK_INTERVAL_MS, "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MustBePositive {
                key: env_config::TICK_INTERVAL_MS
            }
        );
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = CoachConfig::from_lookup(lookup(&[(env_config::HOLD_TIMER_POLICY, "pause")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { value, .. } if value == "pause"));
    }
}

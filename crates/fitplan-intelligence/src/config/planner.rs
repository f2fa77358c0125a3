// ABOUTME: Planner configuration with environment overrides and validation
// ABOUTME: Holds plan size limits behind a lazily loaded global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration
//!
//! The recommendation rules themselves are static tables; only plan size limits
//! are configurable. Values come from defaults overridden by environment
//! variables:
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `FITPLAN_MAX_EXERCISES` | `limits.max_exercises` | 8 |

use super::error::ConfigError;
use fitplan_core::constants::limits::{DEFAULT_MAX_EXERCISES, MAX_EXERCISES_CEILING};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Environment variable overriding the exercise limit
pub const MAX_EXERCISES_ENV: &str = "FITPLAN_MAX_EXERCISES";

/// Planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Limits on generated plan content
    pub limits: PlanLimits,
}

/// Limits on generated plan content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanLimits {
    /// Maximum number of exercises kept after deduplication
    pub max_exercises: usize,
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self {
            max_exercises: DEFAULT_MAX_EXERCISES,
        }
    }
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an invalid value or
    /// validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `max_exercises` is zero or above the ceiling
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_exercises == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_exercises must be at least 1",
            ));
        }
        if self.limits.max_exercises > MAX_EXERCISES_CEILING {
            return Err(ConfigError::ValueOutOfRange(
                "max_exercises must not exceed 32",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(MAX_EXERCISES_ENV, &mut self.limits.max_exercises)?;
        Ok(self)
    }
}

// ABOUTME: Configuration module for fitplan-intelligence crate
// ABOUTME: Re-exports planner configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Planner limits loaded from the environment
pub mod planner;

pub use error::ConfigError;
pub use planner::{PlanLimits, PlannerConfig};

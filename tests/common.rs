// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, a default-config engine and profile builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitplan`

use fitplan::{Plan, PlanRecommender, RecommendationEngine, UserProfile};
use fitplan_intelligence::PlannerConfig;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Engine with default limits, independent of the process environment
pub fn engine() -> RecommendationEngine {
    init_test_logging();
    RecommendationEngine::with_config(PlannerConfig::default())
}

/// Generate a plan with the default-config engine
pub fn plan_for(profile: &UserProfile) -> Plan {
    engine().generate_plan(profile).unwrap()
}

/// Healthy 65 kg / 170 cm profile with the given free-text fields
pub fn profile(goal: &str, diet: &str, equipment: &str) -> UserProfile {
    UserProfile::new(65.0, 170.0)
        .with_goal(goal)
        .with_diet_preferences(diet)
        .with_equipment(equipment)
}

/// Owned copy of a static string table
pub fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

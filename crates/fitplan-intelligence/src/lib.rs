// ABOUTME: BMI calculation and rule-based lifestyle plan recommendations
// ABOUTME: Stateless, synchronous engine turning a user profile into a plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Intelligence
//!
//! Every function here is pure: no I/O, no shared mutable state beyond the
//! lazily loaded configuration. Callers may generate plans from any number of
//! threads without coordination.
//!
//! ## Modules
//!
//! - **bmi**: BMI formula, category thresholds and display formatting
//! - **classification**: free-text equipment, goal and diet parsing into enums
//! - **catalog**: static exercise and meal tables
//! - **recommendation_engine**: plan assembly
//! - **config**: plan limits with environment overrides

/// BMI calculator
pub mod bmi;

/// Static exercise and meal tables
pub mod catalog;

/// Free-text classification into closed enums
pub mod classification;

/// Planner configuration
pub mod config;

/// Plan assembly
pub mod recommendation_engine;

pub use bmi::{bmi_category, calc_bmi, format_bmi};
pub use classification::{
    DietGoal, DietType, EquipmentGroup, EquipmentSet, ExerciseFocus, GoalIntent,
    ProfileClassification,
};
pub use config::PlannerConfig;
pub use recommendation_engine::{generate_plan, PlanRecommender, RecommendationEngine};

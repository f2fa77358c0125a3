// ABOUTME: Core data models for the fitplan planner
// ABOUTME: Re-exports the input profile and the generated plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `UserProfile`: everything the user supplies for one request
//! - `Plan`: the BMI, category, exercise list, meal plan and notes produced for it
//!
//! Both are ephemeral: created per request, rendered, then dropped.

mod plan;
mod profile;

pub use plan::{BmiCategory, Plan};
pub use profile::{ActivityLevel, FitnessGoal, Gender, UserProfile};

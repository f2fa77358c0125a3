// ABOUTME: Main library entry point for the fitplan BMI and lifestyle planner
// ABOUTME: Presentation boundary: form parsing, plan rendering and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan
//!
//! Computes a body-mass index from weight and height, maps it to a category,
//! and recommends a static exercise list, meal plan and advisory notes chosen
//! by simple rules over the user's equipment, goal and diet preference.
//!
//! ## Architecture
//!
//! - **`fitplan-core`**: errors, models and constants
//! - **`fitplan-intelligence`**: BMI calculator and recommendation engine
//! - **this crate**: form parsing, Markdown/JSON rendering and logging
//!
//! ## Example Usage
//!
//! ```rust
//! use fitplan::form::PlanForm;
//! use fitplan::render::{generate_plan_text, OutputFormat};
//!
//! let form = PlanForm {
//!     weight: "65".into(),
//!     height: "170".into(),
//!     ..PlanForm::default()
//! };
//! let text = generate_plan_text(form, OutputFormat::Markdown);
//! assert!(text.contains("**BMI:** 22.49 (🟢 Healthy)"));
//! ```

/// Plan request form and numeric field parsing
pub mod form;

/// Structured logging setup
pub mod logging;

/// Markdown and JSON rendering
pub mod render;

pub use fitplan_core::errors::{AppError, AppResult, ErrorCode};
pub use fitplan_core::models::{
    ActivityLevel, BmiCategory, FitnessGoal, Gender, Plan, UserProfile,
};
pub use fitplan_intelligence::{generate_plan, PlanRecommender, RecommendationEngine};

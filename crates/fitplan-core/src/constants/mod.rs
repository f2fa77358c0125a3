// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Advisory note texts, user-facing messages, limits and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Fixed texts emitted into a plan live here so the engine and the renderer
//! agree on them and tests can assert against the same values.

/// Advisory note texts appended to every plan
pub mod notes {
    /// Overweight or obese: energy deficit guidance
    pub const CALORIE_DEFICIT: &str = "Focus on calorie deficit and daily step target (8k–10k).";
    /// Underweight: energy surplus guidance
    pub const CALORIE_SURPLUS: &str = "Add 400–500 kcal/day; focus on calorie-dense meals.";
    /// Healthy range: maintenance guidance
    pub const MAINTENANCE: &str = "Maintain balance with consistent training & nutrition.";
    /// Appended when the user opts into wearable integration
    pub const WEARABLES: &str = "Sync wearables to track HR, calories & sleep for optimization.";
    /// Prefix of the medical caution note; the raw history text follows it
    pub const MEDICAL_CAUTION_PREFIX: &str = "⚕️ Be cautious due to: ";
}

/// User-facing messages produced by the presentation layer
pub mod messages {
    /// Shown instead of a plan when age, height or weight is not numeric
    pub const PARSE_FAILURE: &str = "❌ Please enter valid numbers for age, height, and weight.";
    /// Closing line of every rendered plan
    pub const PLAN_TIP: &str =
        "⚡ *Tip:* Consistency and gradual improvement matter more than perfection.";
    /// Message of the BMI calculator's height rejection
    pub const HEIGHT_MUST_BE_POSITIVE: &str = "Height must be > 0";
}

/// Plan size limits
pub mod limits {
    /// Default maximum number of exercises kept in a plan
    pub const DEFAULT_MAX_EXERCISES: usize = 8;
    /// Upper bound accepted for the configurable exercise limit
    pub const MAX_EXERCISES_CEILING: usize = 32;
}

/// BMI category thresholds (kg/m²)
pub mod bmi_thresholds {
    /// Lower bound of the healthy range
    pub const HEALTHY_MIN: f64 = 18.5;
    /// Lower bound of the overweight range
    pub const OVERWEIGHT_MIN: f64 = 25.0;
    /// Lower bound of the obese range
    pub const OBESE_MIN: f64 = 30.0;
}

/// Service names for structured logging
pub mod service_names {
    /// Planner CLI service name
    pub const FITPLAN: &str = "fitplan";
}

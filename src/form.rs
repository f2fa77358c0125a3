// ABOUTME: Plan request form as received from the presentation layer
// ABOUTME: Parses text-typed numeric fields into a UserProfile or a fixed parse-failure error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Form boundary
//!
//! Numeric fields arrive as text. If any of age, height or weight does not
//! parse, the whole request fails with a single `ParseFailure` carrying the
//! user-facing message; no partial plan is produced.

use fitplan_core::constants::messages::PARSE_FAILURE;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{ActivityLevel, FitnessGoal, Gender, UserProfile};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use tracing::warn;

/// Default display name when the form leaves it blank
pub const DEFAULT_NAME: &str = "Student";

/// All form fields, numeric ones still as text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanForm {
    /// Display name used in the plan header
    pub name: String,
    /// Age in whole years (text)
    pub age: String,
    /// Gender choice
    pub gender: Gender,
    /// Height in centimeters (text)
    pub height: String,
    /// Weight in kilograms (text)
    pub weight: String,
    /// Activity level choice
    pub activity: ActivityLevel,
    /// Free-text goal (lose/gain/maintain)
    pub goal: String,
    /// Free-text medical history
    pub medical_history: String,
    /// Medications and allergies
    pub medications: String,
    /// Fitness goal choice
    pub fitness_goal: Option<FitnessGoal>,
    /// Wearable integration checkbox
    pub integrate_wearables: bool,
    /// Free-text diet preference
    pub diet_preferences: String,
    /// Free-text available equipment
    pub equipment: String,
}

impl Default for PlanForm {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.into(),
            age: "25".into(),
            gender: Gender::Male,
            height: "170".into(),
            weight: "65".into(),
            activity: ActivityLevel::Moderate,
            goal: "lose".into(),
            medical_history: String::new(),
            medications: String::new(),
            fitness_goal: Some(FitnessGoal::OverallWellness),
            integrate_wearables: false,
            diet_preferences: String::new(),
            equipment: String::new(),
        }
    }
}

/// A parsed form: who the plan is for and their profile
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Display name
    pub name: String,
    /// Parsed profile
    pub profile: UserProfile,
}

impl PlanForm {
    /// Parse the numeric fields and build the profile
    ///
    /// # Errors
    ///
    /// Returns `ParseFailure` with the fixed user-facing message if age is not
    /// a whole number or height/weight are not finite numbers
    pub fn into_request(self) -> AppResult<PlanRequest> {
        let age = parse_field::<i64>("age", &self.age)?;
        let height_cm = parse_finite("height", &self.height)?;
        let weight_kg = parse_finite("weight", &self.weight)?;

        let profile = UserProfile {
            age,
            gender: self.gender,
            weight_kg,
            height_cm,
            activity_level: self.activity,
            goal: self.goal,
            medical_history: non_empty(self.medical_history),
            medications: non_empty(self.medications),
            fitness_goal: self.fitness_goal,
            integrate_wearables: self.integrate_wearables,
            diet_preferences: self.diet_preferences,
            equipment: self.equipment,
        };

        Ok(PlanRequest {
            name: self.name,
            profile,
        })
    }
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> AppResult<T> {
    raw.trim().parse().map_err(|_| {
        warn!(field, "Form field is not a valid number");
        AppError::parse_failure(PARSE_FAILURE).with_details(json!({ "field": field }))
    })
}

fn parse_finite(field: &'static str, raw: &str) -> AppResult<f64> {
    let value: f64 = parse_field(field, raw)?;
    if value.is_finite() {
        Ok(value)
    } else {
        warn!(field, "Form field is not a finite number");
        Err(AppError::parse_failure(PARSE_FAILURE).with_details(json!({ "field": field })))
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

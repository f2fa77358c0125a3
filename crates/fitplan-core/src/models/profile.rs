// ABOUTME: User profile model supplied with every plan request
// ABOUTME: Gender, ActivityLevel and FitnessGoal enums with lenient text parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercase, trim and fold `_`/`-` separators into spaces
fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect()
}

/// Gender as selected on the form
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    /// Male
    #[default]
    Male,
    /// Female
    Female,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}' (expected Male or Female)"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "Male",
            Self::Female => "Female",
        })
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Low,
    /// A few sessions per week
    #[default]
    Moderate,
    /// Daily or hard training
    High,
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level '{other}' (expected low, moderate or high)"
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        })
    }
}

/// Structured fitness goal picked from the form's fixed choices
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Weight loss
    WeightLoss,
    /// Muscle gain
    MuscleGain,
    /// Endurance
    Endurance,
    /// Flexibility
    Flexibility,
    /// Overall wellness
    #[default]
    OverallWellness,
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "weight loss" => Ok(Self::WeightLoss),
            "muscle gain" => Ok(Self::MuscleGain),
            "endurance" => Ok(Self::Endurance),
            "flexibility" => Ok(Self::Flexibility),
            "overall wellness" | "wellness" => Ok(Self::OverallWellness),
            other => Err(AppError::invalid_input(format!(
                "Unknown fitness goal '{other}'"
            ))),
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Endurance => "Endurance",
            Self::Flexibility => "Flexibility",
            Self::OverallWellness => "Overall Wellness",
        })
    }
}

/// Everything the user supplies for a single plan request
///
/// `age`, `gender`, `activity_level`, `medications` and `fitness_goal` are part
/// of the request contract but no recommendation rule reads them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Age in years as entered, any integer accepted (unused by the rules)
    pub age: i64,
    /// Gender (unused by the rules)
    pub gender: Gender,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level (unused by the rules)
    pub activity_level: ActivityLevel,
    /// Free-text goal, e.g. "lose weight" or "gain muscle"
    pub goal: String,
    /// Free-text medical history, echoed into the notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    /// Medications and allergies (unused by the rules)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    /// Structured fitness goal (unused by the rules)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness_goal: Option<FitnessGoal>,
    /// Whether the user wants wearable integration
    pub integrate_wearables: bool,
    /// Free-text diet preference, e.g. "veg", "non-veg", "vegan"
    pub diet_preferences: String,
    /// Free-text list of available equipment
    pub equipment: String,
}

impl UserProfile {
    /// Create a profile from the two measurements the BMI needs
    #[must_use]
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
            ..Self::default()
        }
    }

    /// Set the free-text goal
    #[must_use]
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    /// Set the free-text diet preference
    #[must_use]
    pub fn with_diet_preferences(mut self, diet: impl Into<String>) -> Self {
        self.diet_preferences = diet.into();
        self
    }

    /// Set the free-text equipment list
    #[must_use]
    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = equipment.into();
        self
    }

    /// Set the medical history
    #[must_use]
    pub fn with_medical_history(mut self, history: impl Into<String>) -> Self {
        self.medical_history = Some(history.into());
        self
    }

    /// Toggle wearable integration
    #[must_use]
    pub const fn with_wearables(mut self, enabled: bool) -> Self {
        self.integrate_wearables = enabled;
        self
    }

    /// Medical history if present and non-empty
    #[must_use]
    pub fn medical_history(&self) -> Option<&str> {
        self.medical_history.as_deref().filter(|h| !h.is_empty())
    }
}

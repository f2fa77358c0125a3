// ABOUTME: Generated plan model and BMI category classification
// ABOUTME: Plan carries the BMI, its category, exercises, meals and advisory notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body-composition bucket derived from BMI thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Healthy,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Healthy => "Healthy",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Traffic-light emoji shown next to the category
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Underweight => "🟡",
            Self::Healthy => "🟢",
            Self::Overweight => "🟠",
            Self::Obese => "🔴",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Personalized exercise, diet and advice plan for one request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Body-mass index rounded to two decimals
    pub bmi: f64,
    /// Category of `bmi`
    pub category: BmiCategory,
    /// Exercises, deduplicated and capped
    pub exercise: Vec<String>,
    /// Meal lines for one day
    pub diet: Vec<String>,
    /// Advisory notes
    pub notes: Vec<String>,
}

impl Plan {
    /// Empty plan for a computed BMI
    #[must_use]
    pub const fn new(bmi: f64, category: BmiCategory) -> Self {
        Self {
            bmi,
            category,
            exercise: Vec::new(),
            diet: Vec::new(),
            notes: Vec::new(),
        }
    }
}

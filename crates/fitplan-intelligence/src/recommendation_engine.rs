// ABOUTME: Rule-based recommendation engine producing exercise, meal and advice plans
// ABOUTME: Combines BMI category with equipment, goal and diet classification lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation engine
//!
//! A plan is built in four steps:
//!
//! 1. BMI and category (the only step that can fail)
//! 2. Exercises: one catalog list per detected equipment group, adjusted by the
//!    goal, deduplicated in first-occurrence order and capped
//! 3. Meals: one cell of the diet type x goal bucket table
//! 4. Notes: BMI summary, one category note, optional wearables and medical notes
//!
//! Steps 2-4 are independent of each other; only the notes read the category.

use crate::bmi::{bmi_category, calc_bmi, format_bmi};
use crate::catalog::{
    exercises_for, meal_plan, FAT_LOSS_FINISHERS, PRESS_MARKER, STRENGTH_FINISHERS,
};
use crate::classification::{DietGoal, DietType, EquipmentSet, ExerciseFocus, ProfileClassification};
use crate::config::PlannerConfig;
use fitplan_core::constants::notes;
use fitplan_core::errors::AppResult;
use fitplan_core::models::{BmiCategory, Plan, UserProfile};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Trait for generating personalized plans
pub trait PlanRecommender {
    /// Generate a plan for one profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the profile's height is not positive
    fn generate_plan(&self, profile: &UserProfile) -> AppResult<Plan>;
}

/// Rule-based recommendation engine with configurable plan limits
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: PlannerConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine using the global planner configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::global().clone(),
        }
    }

    /// Create an engine with an explicit configuration
    #[must_use]
    pub const fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build the exercise list for the detected equipment and goal
    #[must_use]
    pub fn select_exercises(&self, equipment: EquipmentSet, focus: ExerciseFocus) -> Vec<String> {
        let mut exercises: Vec<&'static str> = equipment
            .groups()
            .flat_map(|group| exercises_for(group).iter().copied())
            .collect();

        match focus {
            ExerciseFocus::FatLoss => {
                exercises.retain(|exercise| !exercise.contains(PRESS_MARKER));
                exercises.extend(FAT_LOSS_FINISHERS);
            }
            ExerciseFocus::Strength => exercises.extend(STRENGTH_FINISHERS),
            ExerciseFocus::General => {}
        }

        let mut selected = dedup_stable(exercises);
        selected.truncate(self.config.limits.max_exercises);
        selected.into_iter().map(str::to_owned).collect()
    }

    /// Look up the meal plan for a diet type and goal bucket
    #[must_use]
    pub fn select_meals(diet_type: DietType, goal: DietGoal) -> Vec<String> {
        meal_plan(diet_type, goal)
            .iter()
            .map(|meal| (*meal).to_owned())
            .collect()
    }

    /// Assemble the advisory notes
    #[must_use]
    pub fn assemble_notes(bmi: f64, category: BmiCategory, profile: &UserProfile) -> Vec<String> {
        let mut plan_notes = vec![format!("Your BMI: {} ({category})", format_bmi(bmi))];

        plan_notes.push(category_note(category).to_owned());

        if profile.integrate_wearables {
            plan_notes.push(notes::WEARABLES.to_owned());
        }

        if let Some(history) = profile.medical_history() {
            plan_notes.push(format!("{}{history}", notes::MEDICAL_CAUTION_PREFIX));
        }

        plan_notes
    }
}

impl PlanRecommender for RecommendationEngine {
    #[instrument(skip_all, fields(weight_kg = profile.weight_kg, height_cm = profile.height_cm))]
    fn generate_plan(&self, profile: &UserProfile) -> AppResult<Plan> {
        let bmi = calc_bmi(profile.weight_kg, profile.height_cm)?;
        let category = bmi_category(bmi);

        let classification = ProfileClassification::classify(
            &profile.equipment,
            &profile.goal,
            &profile.diet_preferences,
        );

        let mut plan = Plan::new(bmi, category);
        plan.exercise =
            self.select_exercises(classification.equipment, classification.goal.exercise);
        plan.diet = Self::select_meals(classification.diet_type, classification.goal.diet);
        plan.notes = Self::assemble_notes(bmi, category, profile);

        debug!(
            bmi,
            %category,
            exercises = plan.exercise.len(),
            meals = plan.diet.len(),
            notes = plan.notes.len(),
            "Generated plan"
        );
        Ok(plan)
    }
}

/// Generate a plan with the global configuration
///
/// # Errors
///
/// Returns `InvalidInput` if the profile's height is not positive
pub fn generate_plan(profile: &UserProfile) -> AppResult<Plan> {
    RecommendationEngine::new().generate_plan(profile)
}

/// The single category-dependent note
const fn category_note(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Overweight | BmiCategory::Obese => notes::CALORIE_DEFICIT,
        BmiCategory::Underweight => notes::CALORIE_SURPLUS,
        BmiCategory::Healthy => notes::MAINTENANCE,
    }
}

/// Drop repeated entries, keeping the first occurrence of each
fn dedup_stable(items: Vec<&'static str>) -> Vec<&'static str> {
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}

// ABOUTME: Static exercise and meal catalog used by the recommendation engine
// ABOUTME: Declarative lookup tables keyed by equipment group, goal and diet type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise and meal catalog
//!
//! Pure data. The engine only looks entries up; changing content never
//! touches control flow.

use crate::classification::{DietGoal, DietType, EquipmentGroup};

/// Appended for fat-loss goals after presses are removed
pub const FAT_LOSS_FINISHERS: [&str; 3] = ["Jump Rope", "HIIT Session (20 mins)", "Brisk Walking"];

/// Appended for strength goals
pub const STRENGTH_FINISHERS: [&str; 3] = [
    "Progressive Overload Lifts",
    "Compound Movements",
    "Protein Recovery",
];

/// Substring marking an exercise as a press (case-sensitive)
pub const PRESS_MARKER: &str = "Press";

/// Exercises offered for an equipment group
#[must_use]
pub const fn exercises_for(group: EquipmentGroup) -> &'static [&'static str] {
    match group {
        EquipmentGroup::Dumbbell => &[
            "Dumbbell Bench Press",
            "Dumbbell Shoulder Press",
            "Dumbbell Bicep Curls",
            "Dumbbell Squats",
            "Dumbbell Deadlifts",
        ],
        EquipmentGroup::Barbell => &[
            "Barbell Squat",
            "Barbell Deadlift",
            "Bench Press",
            "Barbell Row",
        ],
        EquipmentGroup::ResistanceBand => &[
            "Resistance Band Pull Aparts",
            "Band Rows",
            "Band Squats",
            "Band Bicep Curls",
        ],
        EquipmentGroup::Machine => &[
            "Leg Press",
            "Cable Rows",
            "Lat Pulldown",
            "Chest Press Machine",
        ],
        EquipmentGroup::Cardio => &[
            "Treadmill Running (20-30 mins)",
            "Stationary Bike (20 mins)",
            "Incline Walk",
        ],
        EquipmentGroup::Bodyweight => &[
            "Push-Ups",
            "Bodyweight Squats",
            "Planks",
            "Lunges",
            "Mountain Climbers",
        ],
    }
}

/// One day of meals for a diet type and goal bucket
#[must_use]
pub const fn meal_plan(diet_type: DietType, goal: DietGoal) -> &'static [&'static str] {
    match (diet_type, goal) {
        (DietType::NonVegetarian, DietGoal::Gain) => &[
            "Breakfast: Omelette + Whole wheat bread + Milk",
            "Lunch: Brown rice + Grilled Chicken + Veggies",
            "Snack: Peanut Butter + Banana",
            "Dinner: Chicken curry + Roti + Salad",
        ],
        (DietType::NonVegetarian, DietGoal::Lose) => &[
            "Breakfast: Boiled eggs + Oats + Green tea",
            "Lunch: Grilled fish/chicken + Brown rice + Salad",
            "Snack: Roasted chana or nuts",
            "Dinner: Clear soup + Veg sauté + Chicken breast",
        ],
        (DietType::NonVegetarian, DietGoal::Wellness) => &[
            "Breakfast: Scrambled eggs + Fruits",
            "Lunch: Mixed dal + Chicken + Veg curry",
            "Dinner: Paneer tikka + Brown rice + Soup",
        ],
        (DietType::Vegetarian, DietGoal::Gain) => &[
            "Breakfast: Paneer bhurji + Whole wheat bread + Milk",
            "Lunch: Rajma + Brown rice + Ghee",
            "Snack: Dry fruits + Smoothie",
            "Dinner: Paneer tikka + Roti + Salad",
        ],
        (DietType::Vegetarian, DietGoal::Lose) => &[
            "Breakfast: Oats + Banana + Green tea",
            "Lunch: Moong dal + Brown rice + Veggies",
            "Snack: Roasted chana + Buttermilk",
            "Dinner: Soup + Salad + Light dal",
        ],
        (DietType::Vegetarian, DietGoal::Wellness) => &[
            "Breakfast: Upma/Poha + Milk",
            "Lunch: Khichdi + Curd + Salad",
            "Dinner: Roti + Dal + Veg curry",
        ],
    }
}

// ABOUTME: Free-text classification of equipment, goal and diet preference fields
// ABOUTME: Parses user text once into closed enums so the rule tables branch on types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Free-text classification
//!
//! All matching is case-insensitive substring matching on the raw field. Every
//! input, including the empty string, lands in some variant, so classification
//! never fails.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One catalog group of exercises selected by equipment keywords
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentGroup {
    /// Dumbbells
    Dumbbell,
    /// Barbell
    Barbell,
    /// Resistance bands
    ResistanceBand,
    /// Gym machines
    Machine,
    /// Treadmill, bike or other cardio equipment
    Cardio,
    /// No equipment
    Bodyweight,
}

impl EquipmentGroup {
    /// All groups in the order their exercises are listed
    pub const ALL: [Self; 6] = [
        Self::Dumbbell,
        Self::Barbell,
        Self::ResistanceBand,
        Self::Machine,
        Self::Cardio,
        Self::Bodyweight,
    ];

    /// Keywords that select this group
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Dumbbell => &["dumbbell"],
            Self::Barbell => &["barbell"],
            Self::ResistanceBand => &["resistance", "band"],
            Self::Machine => &["machine"],
            Self::Cardio => &["treadmill", "cycle", "cardio"],
            Self::Bodyweight => &["bodyweight"],
        }
    }

    /// Flag of this group inside an [`EquipmentSet`]
    #[must_use]
    pub const fn flag(self) -> EquipmentSet {
        match self {
            Self::Dumbbell => EquipmentSet::DUMBBELL,
            Self::Barbell => EquipmentSet::BARBELL,
            Self::ResistanceBand => EquipmentSet::RESISTANCE_BAND,
            Self::Machine => EquipmentSet::MACHINE,
            Self::Cardio => EquipmentSet::CARDIO,
            Self::Bodyweight => EquipmentSet::BODYWEIGHT,
        }
    }
}

bitflags! {
    /// Equipment groups recognized in the user's equipment text
    ///
    /// Groups are independently additive: "dumbbells and a treadmill" selects
    /// both `DUMBBELL` and `CARDIO`.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EquipmentSet: u8 {
        /// Dumbbells
        const DUMBBELL = 0b0000_0001;
        /// Barbell
        const BARBELL = 0b0000_0010;
        /// Resistance bands
        const RESISTANCE_BAND = 0b0000_0100;
        /// Gym machines
        const MACHINE = 0b0000_1000;
        /// Cardio equipment
        const CARDIO = 0b0001_0000;
        /// Bodyweight only (also selected by empty text)
        const BODYWEIGHT = 0b0010_0000;
    }
}

impl EquipmentSet {
    /// Classify free-text equipment
    ///
    /// Empty text always selects `BODYWEIGHT`. Text that matches no keyword
    /// selects nothing.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let normalized = text.to_lowercase();
        let mut set = Self::empty();
        for group in EquipmentGroup::ALL {
            if group.keywords().iter().any(|kw| normalized.contains(kw)) {
                set |= group.flag();
            }
        }
        if normalized.is_empty() {
            set |= Self::BODYWEIGHT;
        }
        set
    }

    /// Groups in this set, in catalog order
    pub fn groups(self) -> impl Iterator<Item = EquipmentGroup> {
        EquipmentGroup::ALL
            .into_iter()
            .filter(move |group| self.contains(group.flag()))
    }
}

/// How the goal shapes the exercise list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseFocus {
    /// Goal mentions "lose" or "weight": drop presses, add cardio finishers
    FatLoss,
    /// Goal mentions "gain" or "muscle": add strength finishers
    Strength,
    /// Anything else
    General,
}

impl ExerciseFocus {
    /// Classify a free-text goal; "lose"/"weight" win over "gain"/"muscle"
    #[must_use]
    pub fn from_goal(goal: &str) -> Self {
        let goal = goal.to_lowercase();
        if goal.contains("lose") || goal.contains("weight") {
            Self::FatLoss
        } else if goal.contains("gain") || goal.contains("muscle") {
            Self::Strength
        } else {
            Self::General
        }
    }
}

/// Goal bucket used to pick a meal plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietGoal {
    /// Goal mentions "gain"
    Gain,
    /// Goal mentions "lose"
    Lose,
    /// Anything else
    Wellness,
}

impl DietGoal {
    /// Classify a free-text goal; "gain" wins over "lose"
    #[must_use]
    pub fn from_goal(goal: &str) -> Self {
        let goal = goal.to_lowercase();
        if goal.contains("gain") {
            Self::Gain
        } else if goal.contains("lose") {
            Self::Lose
        } else {
            Self::Wellness
        }
    }
}

/// Diet type derived from the diet preference text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Preference mentions "non" (non-veg, non-vegetarian)
    NonVegetarian,
    /// Vegetarian or vegan, and the fallback for anything else
    Vegetarian,
}

impl DietType {
    /// Classify a free-text diet preference
    #[must_use]
    pub fn from_preference(preference: &str) -> Self {
        if preference.to_lowercase().contains("non") {
            Self::NonVegetarian
        } else {
            Self::Vegetarian
        }
    }
}

/// Both readings of the free-text goal
///
/// The exercise and diet rules check keywords in different orders, so
/// "gain weight" is fat-loss training with a weight-gain meal plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalIntent {
    /// Exercise reading
    pub exercise: ExerciseFocus,
    /// Diet reading
    pub diet: DietGoal,
}

impl GoalIntent {
    /// Classify a free-text goal
    #[must_use]
    pub fn from_goal(goal: &str) -> Self {
        Self {
            exercise: ExerciseFocus::from_goal(goal),
            diet: DietGoal::from_goal(goal),
        }
    }
}

/// Classification of every free-text field of a profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileClassification {
    /// Equipment groups
    pub equipment: EquipmentSet,
    /// Goal readings
    pub goal: GoalIntent,
    /// Diet type
    pub diet_type: DietType,
}

impl ProfileClassification {
    /// Classify the three free-text fields
    #[must_use]
    pub fn classify(equipment: &str, goal: &str, diet_preferences: &str) -> Self {
        let classification = Self {
            equipment: EquipmentSet::from_text(equipment),
            goal: GoalIntent::from_goal(goal),
            diet_type: DietType::from_preference(diet_preferences),
        };
        debug!(
            equipment = ?classification.equipment,
            exercise_focus = ?classification.goal.exercise,
            diet_goal = ?classification.goal.diet,
            diet_type = ?classification.diet_type,
            "Classified profile text"
        );
        classification
    }
}

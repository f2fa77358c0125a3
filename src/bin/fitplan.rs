// ABOUTME: fitplan CLI - personalized fitness and nutrition plan from the command line
// ABOUTME: Accepts every form field as an argument and prints the rendered plan to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Default profile (65 kg, 170 cm, goal "lose")
//! fitplan
//!
//! # Muscle gain with dumbbells on a vegan diet
//! fitplan --weight 72 --height 178 --goal "gain muscle" \
//!     --equipment "dumbbells, bands" --diet vegan
//!
//! # JSON output with medical caution and wearables
//! fitplan --weight 90 --medical-history diabetes --wearables --format json
//! ```

use anyhow::Result;
use clap::Parser;
use fitplan::form::{PlanForm, DEFAULT_NAME};
use fitplan::logging::LoggingConfig;
use fitplan::render::{render_error, try_generate_plan_text, OutputFormat};
use fitplan::{ActivityLevel, ErrorCode, FitnessGoal, Gender, RecommendationEngine};
use std::process::ExitCode;
use tracing::{debug, error};

/// Exit status when the input could not produce a plan
const INPUT_ERROR_EXIT: u8 = 1;

/// Exit status for configuration, serialization or internal failures
const SYSTEM_ERROR_EXIT: u8 = 2;

#[derive(Parser)]
#[command(
    name = "fitplan",
    about = "Personalized fitness and nutrition plan",
    long_about = "Computes BMI from weight and height and recommends exercises, meals and notes \
                  based on available equipment, goal and diet preference."
)]
struct Cli {
    /// Name shown in the plan header
    #[arg(long, default_value = DEFAULT_NAME)]
    name: String,

    /// Age in years
    #[arg(long, default_value = "25")]
    age: String,

    /// Gender (Male or Female)
    #[arg(long, default_value = "Male")]
    gender: Gender,

    /// Height in centimeters
    #[arg(long, default_value = "170")]
    height: String,

    /// Weight in kilograms
    #[arg(long, default_value = "65")]
    weight: String,

    /// Activity level (low, moderate, high)
    #[arg(long, default_value = "moderate")]
    activity: ActivityLevel,

    /// Goal (lose/gain/maintain)
    #[arg(long, default_value = "lose")]
    goal: String,

    /// Medical history
    #[arg(long, default_value = "")]
    medical_history: String,

    /// Medications and allergies
    #[arg(long, default_value = "")]
    medications: String,

    /// Fitness goal (Weight Loss, Muscle Gain, Endurance, Flexibility, Overall Wellness)
    #[arg(long, default_value = "Overall Wellness")]
    fitness_goal: FitnessGoal,

    /// Integrate with wearables
    #[arg(long)]
    wearables: bool,

    /// Diet preference (e.g. veg, non-veg, vegan, low-carb)
    #[arg(long = "diet", default_value = "")]
    diet_preferences: String,

    /// Available equipment (e.g. dumbbells, treadmill, bands)
    #[arg(long, default_value = "")]
    equipment: String,

    /// Output format (markdown or json)
    #[arg(long, default_value = "markdown")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn into_form(self) -> (PlanForm, OutputFormat) {
        let form = PlanForm {
            name: self.name,
            age: self.age,
            gender: self.gender,
            height: self.height,
            weight: self.weight,
            activity: self.activity,
            goal: self.goal,
            medical_history: self.medical_history,
            medications: self.medications,
            fitness_goal: Some(self.fitness_goal),
            integrate_wearables: self.wearables,
            diet_preferences: self.diet_preferences,
            equipment: self.equipment,
        };
        (form, self.format)
    }
}

fn exit_code_for(code: ErrorCode) -> ExitCode {
    if code.is_user_error() {
        ExitCode::from(INPUT_ERROR_EXIT)
    } else {
        ExitCode::from(SYSTEM_ERROR_EXIT)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let engine = RecommendationEngine::new();
    debug!(config = ?engine.config(), "Planner configuration loaded");

    let (form, format) = cli.into_form();
    match try_generate_plan_text(&engine, form, format) {
        Ok(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let code = err.code;
            if !code.is_user_error() {
                error!(code = ?code, "Plan generation failed");
            }
            println!("{}", render_error(err, format));
            Ok(exit_code_for(code))
        }
    }
}

// ABOUTME: Tests for form parsing and plan rendering at the presentation boundary
// ABOUTME: Covers parse failures, Markdown layout, JSON output and error rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::engine;
use fitplan::form::{PlanForm, DEFAULT_NAME};
use fitplan::render::{
    generate_plan_text, render_error, render_json, render_markdown, try_generate_plan_text,
    OutputFormat,
};
use fitplan::{ActivityLevel, AppError, BmiCategory, ErrorCode, FitnessGoal, Gender, Plan};
use fitplan_core::constants::messages::{PARSE_FAILURE, PLAN_TIP};
use fitplan_core::errors::ErrorResponse;

fn form(age: &str, height: &str, weight: &str) -> PlanForm {
    PlanForm {
        age: age.into(),
        height: height.into(),
        weight: weight.into(),
        ..PlanForm::default()
    }
}

// ============================================================================
// FORM PARSING
// ============================================================================

#[test]
fn test_default_form_values() {
    let form = PlanForm::default();
    assert_eq!(form.name, DEFAULT_NAME);
    assert_eq!(form.age, "25");
    assert_eq!(form.gender, Gender::Male);
    assert_eq!(form.height, "170");
    assert_eq!(form.weight, "65");
    assert_eq!(form.activity, ActivityLevel::Moderate);
    assert_eq!(form.goal, "lose");
    assert_eq!(form.fitness_goal, Some(FitnessGoal::OverallWellness));
    assert!(!form.integrate_wearables);
}

#[test]
fn test_into_request_parses_numbers() {
    let request = form(" 30 ", "182.5", "77.25").into_request().unwrap();
    assert_eq!(request.name, DEFAULT_NAME);
    assert_eq!(request.profile.age, 30);
    assert_eq!(request.profile.height_cm, 182.5);
    assert_eq!(request.profile.weight_kg, 77.25);
    assert_eq!(request.profile.goal, "lose");
}

#[test]
fn test_negative_age_is_accepted() {
    let request = form("-5", "170", "65").into_request().unwrap();
    assert_eq!(request.profile.age, -5);
    assert_eq!(form("+40", "170", "65").into_request().unwrap().profile.age, 40);
}

#[test]
fn test_empty_free_text_becomes_none() {
    let request = PlanForm::default().into_request().unwrap();
    assert!(request.profile.medical_history.is_none());
    assert!(request.profile.medications.is_none());

    let request = PlanForm {
        medical_history: "asthma".into(),
        ..PlanForm::default()
    }
    .into_request()
    .unwrap();
    assert_eq!(request.profile.medical_history(), Some("asthma"));
}

#[test]
fn test_non_numeric_fields_fail_with_fixed_message() {
    for (bad, field) in [
        (form("abc", "170", "65"), "age"),
        (form("25.5", "170", "65"), "age"),
        (form("25", "tall", "65"), "height"),
        (form("25", "170", ""), "weight"),
        (form("25", "inf", "65"), "height"),
        (form("25", "170", "NaN"), "weight"),
    ] {
        let err = bad.into_request().unwrap_err();
        assert_eq!(err.code, ErrorCode::ParseFailure);
        assert_eq!(err.message, PARSE_FAILURE);
        assert_eq!(err.details["field"], field);
    }
}

#[test]
fn test_enum_fields_parse_leniently() {
    assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
    assert_eq!(" HIGH ".parse::<ActivityLevel>().unwrap(), ActivityLevel::High);
    assert_eq!(
        "muscle_gain".parse::<FitnessGoal>().unwrap(),
        FitnessGoal::MuscleGain
    );
    assert_eq!(
        "Overall Wellness".parse::<FitnessGoal>().unwrap(),
        FitnessGoal::OverallWellness
    );
    let err = "sometimes".parse::<ActivityLevel>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

// ============================================================================
// MARKDOWN
// ============================================================================

#[test]
fn test_markdown_layout_for_default_form() {
    let text = try_generate_plan_text(&engine(), PlanForm::default(), OutputFormat::Markdown)
        .unwrap();

    assert!(text.starts_with(
        "# 🧬 Personalized Fitness & Nutrition Plan for Student\n\n**BMI:** 22.49 (🟢 Healthy)\n\n---\n\n"
    ));
    assert!(text.contains("## 🏋️ Exercise Plan\n- Push-Ups\n- Bodyweight Squats\n"));
    assert!(text.contains("## 🍽️ Diet Plan\n- Breakfast: Oats + Banana + Green tea\n"));
    assert!(text.contains(
        "## 📝 Notes\n- Your BMI: 22.49 (Healthy)\n- Maintain balance with consistent training & nutrition."
    ));
    assert!(text.ends_with(&format!("\n\n---\n\n{PLAN_TIP}\n")));
    assert_eq!(text.matches("\n\n---\n\n").count(), 4);
}

#[test]
fn test_markdown_uses_category_emoji_and_name() {
    let mut plan = Plan::new(31.14, BmiCategory::Obese);
    plan.notes.push("Your BMI: 31.14 (Obese)".into());
    let text = render_markdown("Asha", &plan);
    assert!(text.contains("Plan for Asha\n"));
    assert!(text.contains("**BMI:** 31.14 (🔴 Obese)"));
    assert!(text.contains("## 🏋️ Exercise Plan\n\n\n---"));
}

#[test]
fn test_markdown_whole_number_bmi() {
    let text = try_generate_plan_text(
        &engine(),
        form("40", "160", "64"),
        OutputFormat::Markdown,
    )
    .unwrap();
    assert!(text.contains("**BMI:** 25.0 (🟠 Overweight)"));
}

#[test]
fn test_generate_plan_text_renders_parse_failure() {
    let text = generate_plan_text(form("x", "170", "65"), OutputFormat::Markdown);
    assert_eq!(text, PARSE_FAILURE);
}

#[test]
fn test_zero_height_renders_calculator_error() {
    let text = generate_plan_text(form("25", "0", "65"), OutputFormat::Markdown);
    assert_eq!(text, "❌ Height must be > 0");
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_json_output_matches_plan() {
    let text = try_generate_plan_text(
        &engine(),
        PlanForm {
            goal: "gain muscle".into(),
            diet_preferences: "vegan".into(),
            ..PlanForm::default()
        },
        OutputFormat::Json,
    )
    .unwrap();

    let plan: Plan = serde_json::from_str(&text).unwrap();
    assert_eq!(plan.bmi, 22.49);
    assert_eq!(plan.category, BmiCategory::Healthy);
    assert_eq!(plan.diet[1], "Lunch: Rajma + Brown rice + Ghee");

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["category"], "Healthy");
    assert!(value["exercise"].is_array());
}

#[test]
fn test_render_json_directly() {
    let plan = Plan::new(17.3, BmiCategory::Underweight);
    let text = render_json(&plan).unwrap();
    assert!(text.contains("\"bmi\": 17.3"));
    assert!(text.contains("\"category\": \"Underweight\""));
}

#[test]
fn test_json_error_rendering() {
    let text = render_error(
        AppError::parse_failure(PARSE_FAILURE),
        OutputFormat::Json,
    );
    let response: ErrorResponse = serde_json::from_str(&text).unwrap();
    assert_eq!(response.error.code, ErrorCode::ParseFailure);
    assert_eq!(response.error.message, PARSE_FAILURE);
    assert!(!text.contains("details"));
}

#[test]
fn test_json_parse_failure_includes_field() {
    let text = generate_plan_text(form("25", "170", "heavy"), OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["error"]["details"]["field"], "weight");
}

// ============================================================================
// OUTPUT FORMAT
// ============================================================================

#[test]
fn test_output_format_parsing() {
    assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
    assert_eq!("MD".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
    assert_eq!(" json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::default(), OutputFormat::Markdown);
    assert_eq!(OutputFormat::Json.to_string(), "json");
    assert!("yaml".parse::<OutputFormat>().is_err());
}

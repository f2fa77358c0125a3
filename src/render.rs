// ABOUTME: Plan rendering for the presentation layer
// ABOUTME: Markdown and JSON output plus the one-call form-to-text entry point
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::form::PlanForm;
use fitplan_core::constants::messages::PLAN_TIP;
use fitplan_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
use fitplan_core::models::Plan;
use fitplan_intelligence::{format_bmi, PlanRecommender, RecommendationEngine};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Output format for a rendered plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable Markdown
    #[default]
    Markdown,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format '{other}' (expected markdown or json)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
        })
    }
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a plan as Markdown
#[must_use]
pub fn render_markdown(name: &str, plan: &Plan) -> String {
    let header = format!(
        "# 🧬 Personalized Fitness & Nutrition Plan for {name}\n\n**BMI:** {} ({} {})",
        format_bmi(plan.bmi),
        plan.category.emoji(),
        plan.category,
    );

    [
        header,
        format!("## 🏋️ Exercise Plan\n{}", bullets(&plan.exercise)),
        format!("## 🍽️ Diet Plan\n{}", bullets(&plan.diet)),
        format!("## 📝 Notes\n{}", bullets(&plan.notes)),
        format!("{PLAN_TIP}\n"),
    ]
    .join("\n\n---\n\n")
}

/// Render a plan as pretty-printed JSON
///
/// # Errors
///
/// Returns `SerializationError` if the plan cannot be serialized
pub fn render_json(plan: &Plan) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Render an error for the chosen format
#[must_use]
pub fn render_error(error: AppError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Markdown => user_message(&error),
        OutputFormat::Json => {
            let fallback = user_message(&error);
            serde_json::to_string_pretty(&ErrorResponse::from(error)).unwrap_or(fallback)
        }
    }
}

/// Text shown to the user for a failed request
fn user_message(error: &AppError) -> String {
    match error.code {
        // Parse failures already carry the complete user-facing message
        ErrorCode::ParseFailure => error.message.clone(),
        _ => format!("❌ {}", error.message),
    }
}

/// Parse the form, generate the plan and render it
///
/// # Errors
///
/// Returns `ParseFailure` for non-numeric fields, `InvalidInput` for a
/// non-positive height and `SerializationError` if JSON output fails
pub fn try_generate_plan_text<R: PlanRecommender>(
    recommender: &R,
    form: PlanForm,
    format: OutputFormat,
) -> AppResult<String> {
    let request = form.into_request()?;
    let plan = recommender.generate_plan(&request.profile)?;
    info!(category = %plan.category, %format, "Plan generated");

    match format {
        OutputFormat::Markdown => Ok(render_markdown(&request.name, &plan)),
        OutputFormat::Json => render_json(&plan),
    }
}

/// Parse the form, generate the plan and render it, rendering failures as text
#[must_use]
pub fn generate_plan_text(form: PlanForm, format: OutputFormat) -> String {
    try_generate_plan_text(&RecommendationEngine::new(), form, format)
        .unwrap_or_else(|error| render_error(error, format))
}

// ABOUTME: Body-mass-index calculation and category classification
// ABOUTME: Computes weight / height² rounded to two decimals and maps it to four buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! BMI Calculator
//!
//! Formula: BMI = `weight_kg` / (`height_cm` / 100)²
//!
//! Categories use half-open intervals evaluated in order:
//!
//! | BMI | Category |
//! |---|---|
//! | < 18.5 | Underweight |
//! | [18.5, 25) | Healthy |
//! | [25, 30) | Overweight |
//! | >= 30 | Obese |

use fitplan_core::constants::bmi_thresholds::{HEALTHY_MIN, OBESE_MIN, OVERWEIGHT_MIN};
use fitplan_core::constants::messages::HEIGHT_MUST_BE_POSITIVE;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::BmiCategory;
use serde_json::json;
use tracing::warn;

/// Calculate BMI rounded to two decimal places
///
/// Weight is deliberately not validated: a zero or negative weight yields a
/// non-positive BMI.
///
/// # Errors
///
/// Returns `InvalidInput` if `height_cm` is not a positive finite number, or
/// `InternalError` if the rounded value cannot be read back
pub fn calc_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if height_cm <= 0.0 || !height_cm.is_finite() {
        warn!(height_cm, "Rejected non-positive height");
        return Err(AppError::invalid_input(HEIGHT_MUST_BE_POSITIVE)
            .with_details(json!({ "field": "height_cm", "value": height_cm })));
    }

    let height_m = height_cm / 100.0;
    round_to_hundredths(weight_kg / (height_m * height_m))
}

/// Map a BMI value to its category
#[must_use]
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < HEALTHY_MIN {
        BmiCategory::Underweight
    } else if bmi < OVERWEIGHT_MIN {
        BmiCategory::Healthy
    } else if bmi < OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Render a BMI in its shortest decimal form, keeping at least one fractional digit
///
/// `22.49` stays `22.49`, `22.5` stays `22.5`, `22.0` renders as `22.0`.
#[must_use]
pub fn format_bmi(bmi: f64) -> String {
    if bmi.is_finite() && bmi.fract().abs() < f64::EPSILON {
        format!("{bmi:.1}")
    } else {
        format!("{bmi}")
    }
}

/// Round the exact binary value to two decimals, ties to even (18.125 -> 18.12)
fn round_to_hundredths(value: f64) -> AppResult<f64> {
    format!("{value:.2}").parse().map_err(|e| {
        AppError::internal(format!("Failed to round BMI {value}: {e}"))
            .with_details(json!({ "value": value.to_string() }))
    })
}

// ABOUTME: Core types and constants for the fitplan BMI and lifestyle planner
// ABOUTME: Foundation crate with error handling, profile/plan models, and note constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing shared types and constants for the fitplan
//! workspace. Both the intelligence crate and the presentation layer depend
//! on it, so it carries no logic beyond parsing and display of its own types.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Advisory note texts, user messages, BMI thresholds and plan limits
//! - **models**: Input profile (`UserProfile`) and output plan (`Plan`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `Plan`, `BmiCategory`, ...)
pub mod models;

// ABOUTME: Unified error types for the fitplan workspace
// ABOUTME: Defines ErrorCode, AppError and the AppResult alias shared by every crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The planner has exactly two user-facing failure kinds: an invalid height
//! rejected by the BMI calculator (`InvalidInput`) and numeric form fields that
//! cannot be parsed (`ParseFailure`). The remaining codes cover configuration
//! and output serialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input value is outside what a calculation accepts
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Numeric form field could not be parsed
    #[serde(rename = "PARSE_FAILURE")]
    ParseFailure = 3002,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Plan could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ParseFailure => "The provided value is not a valid number",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Whether this error was caused by user input rather than the system
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidInput | Self::ParseFailure)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured context (offending field, raw value, ...)
    pub details: serde_json::Value,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
        }
    }

    /// Attach structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Invalid input (e.g. non-positive height)
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Numeric field parse failure at the form boundary
    #[must_use]
    pub fn parse_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseFailure, message)
    }

    /// Invalid configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Machine-readable error body used by JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Error payload of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors_are_input_failures() {
        assert!(ErrorCode::InvalidInput.is_user_error());
        assert!(ErrorCode::ParseFailure.is_user_error());
        assert!(!ErrorCode::ConfigInvalid.is_user_error());
        assert!(!ErrorCode::SerializationError.is_user_error());
        assert!(!ErrorCode::InternalError.is_user_error());
    }

    #[test]
    fn test_internal_error_display_and_response() {
        let error = AppError::internal("rounding failed");
        assert_eq!(error.code, ErrorCode::InternalError);
        assert_eq!(error.to_string(), "An internal error occurred: rounding failed");

        let json = serde_json::to_value(ErrorResponse::from(error)).unwrap_or_default();
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert!(json["error"].get("details").is_none());
    }
}

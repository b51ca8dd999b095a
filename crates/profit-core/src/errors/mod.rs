// ABOUTME: Unified error handling with error codes, context details, and exit status mapping
// ABOUTME: Defines AppError, ErrorCode, and AppResult shared by every ProFit crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Defines the standard error type, error codes and process exit status
//! mapping so the builder, the engine and the CLI report failures the same
//! way.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Request value could not be interpreted
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Request value outside its documented range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Dataset (4000-4999)
    /// Dataset given to the index builder is malformed or empty
    #[serde(rename = "INVALID_DATASET")]
    InvalidDataset = 4000,

    // Model artifacts (5000-5999)
    /// Persisted artifact not found
    #[serde(rename = "MISSING_ARTIFACT")]
    MissingArtifact = 5000,
    /// Persisted artifact exists but cannot be decoded
    #[serde(rename = "CORRUPT_ARTIFACT")]
    CorruptArtifact = 5001,
    /// Scaler and index were not fitted on the same dataset
    #[serde(rename = "ARTIFACT_MISMATCH")]
    ArtifactMismatch = 5002,
    /// Recommendation requested while the model is unavailable
    #[serde(rename = "MODEL_NOT_READY")]
    ModelNotReady = 5003,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Filesystem operation failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status for the CLI (sysexits-style)
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput | Self::ValueOutOfRange => 64,
            Self::InvalidDataset => 65,
            Self::MissingArtifact | Self::ModelNotReady => 69,
            Self::CorruptArtifact | Self::ArtifactMismatch | Self::SerializationError => 70,
            Self::StorageError => 74,
            Self::ConfigInvalid => 78,
            Self::InternalError => 1,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvalidDataset => "The food dataset is invalid",
            Self::MissingArtifact => "A model artifact is missing",
            Self::CorruptArtifact => "A model artifact could not be read",
            Self::ArtifactMismatch => "The model artifacts do not belong together",
            Self::ModelNotReady => "The recommendation model is not ready",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured context
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error body used by the `serve` session
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            code: error.code,
            message: error.message,
            details: error.details,
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside an inclusive range
    #[must_use]
    pub fn out_of_range(field: &str, value: impl fmt::Display, min: u32, max: u32) -> Self {
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be between {min} and {max}, got {value}"),
        )
        .with_details(serde_json::json!({
            "field": field,
            "min": min,
            "max": max,
        }))
    }

    /// Malformed or empty dataset
    #[must_use]
    pub fn invalid_dataset(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidDataset, message)
    }

    /// Artifact not found
    #[must_use]
    pub fn missing_artifact(path: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::MissingArtifact,
            format!("{path} not found; run `profit-cli build` first"),
        )
    }

    /// Artifact present but undecodable
    #[must_use]
    pub fn corrupt_artifact(path: impl fmt::Display, reason: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::CorruptArtifact,
            format!("{path} is unreadable ({reason}); run `profit-cli build` to regenerate it"),
        )
    }

    /// Scaler and index disagree
    #[must_use]
    pub fn artifact_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ArtifactMismatch, message)
    }

    /// Recommendation model unavailable
    #[must_use]
    pub fn model_not_ready(cause: &Self) -> Self {
        Self::new(
            ErrorCode::ModelNotReady,
            "training data not detected; run `profit-cli build` first",
        )
        .with_details(serde_json::json!({
            "cause": cause.code,
            "reason": cause.message,
        }))
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Filesystem error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_error_code_exit_status() {
        assert_eq!(ErrorCode::ValueOutOfRange.exit_code(), 64);
        assert_eq!(ErrorCode::InvalidDataset.exit_code(), 65);
        assert_eq!(ErrorCode::ModelNotReady.exit_code(), 69);
        assert_eq!(ErrorCode::InternalError.exit_code(), 1);
    }

    #[test]
    fn test_model_not_ready_keeps_cause() {
        let cause = AppError::missing_artifact("models/scaler.json");
        let error = AppError::model_not_ready(&cause);

        assert_eq!(error.code, ErrorCode::ModelNotReady);
        assert!(error.message.contains("profit-cli build"));
        assert_eq!(error.details["cause"], "MISSING_ARTIFACT");
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::out_of_range("weight_kg", 200, 40, 150);
        let json = serde_json::to_string(&ErrorResponse::from(error)).unwrap();

        assert!(json.contains("VALUE_OUT_OF_RANGE"));
        assert!(json.contains("weight_kg"));
    }

    #[test]
    fn test_io_error_chains_source() {
        let error = AppError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(error.code, ErrorCode::StorageError);
        assert!(error.source().is_some());
    }
}

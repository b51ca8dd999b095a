// ABOUTME: Main library entry point for the ProFit fitness and nutrition advisor
// ABOUTME: Wires dataset loading, index building, artifact persistence, and the advisor service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ProFit Advisor
//!
//! A small advisory tool. From a user's weight, height, diet preference,
//! budget and protein goal it computes a BMI, picks a training focus and a
//! fixed workout list, and matches foods from a nutrition dataset with a
//! nearest-neighbour search over standardized protein and cost.
//!
//! ## Architecture
//!
//! - **Index builder**: reads the CSV, fits the scaler and the neighbour
//!   index, persists both (`profit-cli build`)
//! - **Advisor service**: loads the artifacts once and answers requests
//!   (`profit-cli recommend`)
//! - **Session**: JSON-lines loop over the same service (`profit-cli serve`)
//! - **Report**: terminal view and plain-text plan export
//!
//! The algorithms live in `profit-intelligence`; errors, models and
//! constants in `profit-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use profit_advisor::advisor::AdvisorService;
//! use profit_advisor::config::AdvisorConfig;
//! use profit_advisor::errors::AppResult;
//! use profit_advisor::models::AdvisorRequest;
//!
//! fn main() -> AppResult<()> {
//!     let config = AdvisorConfig::from_env()?;
//!     let service = AdvisorService::new(config.artifact_paths());
//!     let advice = service.advise(&AdvisorRequest::default())?;
//!     println!("BMI {} ({})", advice.bmi_display, advice.status_label);
//!     Ok(())
//! }
//! ```

/// Advisor service composing classification, exercise selection and food matching
pub mod advisor;

/// Scaler and index artifact persistence
pub mod artifacts;

/// Environment configuration
pub mod config;

/// Food dataset loading
pub mod dataset;

/// Offline index builder
pub mod index_builder;

/// Structured logging setup
pub mod logging;

/// Terminal and export rendering
pub mod report;

/// JSON-lines request session
pub mod session;

/// Application constants (re-exported from `profit-core`)
pub use profit_core::constants;

/// Unified error handling (re-exported from `profit-core`)
pub use profit_core::errors;

/// Domain models (re-exported from `profit-core`)
pub use profit_core::models;

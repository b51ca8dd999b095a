// ABOUTME: Food matching and body classification engine for the ProFit advisor
// ABOUTME: Standard scaler, nearest-neighbour index, BMI rules, and exercise tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ProFit Intelligence
//!
//! The algorithmic half of the advisor:
//!
//! - **algorithms**: standard scaler and Euclidean nearest-neighbour index
//! - **`bmi_classifier`**: BMI threshold table (status, goal, rep range)
//! - **`exercise_selector`**: fixed workout lists per status and location
//! - **`recommendation_engine`**: standardize, query, filter by diet
//! - **config**: matching configuration and validation errors

/// Numeric building blocks (scaler, neighbour index)
pub mod algorithms;

/// BMI threshold classification
pub mod bmi_classifier;

/// Matching configuration
pub mod config;

/// Static workout lookup table
pub mod exercise_selector;

/// Nearest-neighbour food recommendation
pub mod recommendation_engine;

pub use algorithms::{FeatureScale, FeatureVector, Neighbor, NeighborIndex, ScalerParams};
pub use bmi_classifier::{classify, BmiClassification, BmiStatus};
pub use config::{ConfigError, MatchingConfig};
pub use exercise_selector::select_exercises;
pub use recommendation_engine::{FoodIndex, FoodMatch, FoodRecommender};

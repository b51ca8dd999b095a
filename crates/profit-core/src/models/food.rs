// ABOUTME: Food dataset models for nearest-neighbour meal matching
// ABOUTME: FoodRecord and DietType definitions with exact dataset labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dietary category of a food item and of a user's preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietType {
    /// Vegetarian
    #[serde(rename = "Veg", alias = "veg", alias = "VEG")]
    Veg,
    /// Non-vegetarian
    #[serde(
        rename = "Non-Veg",
        alias = "NonVeg",
        alias = "non-veg",
        alias = "non_veg",
        alias = "nonveg"
    )]
    NonVeg,
}

impl DietType {
    /// Dataset/display string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Veg => "Veg",
            Self::NonVeg => "Non-Veg",
        }
    }

    /// Parse a dataset `Type` cell; only the exact labels are accepted
    #[must_use]
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Veg" => Some(Self::Veg),
            "Non-Veg" => Some(Self::NonVeg),
            _ => None,
        }
    }

    /// Parse a command-line string, ignoring case
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "veg" | "vegetarian" => Some(Self::Veg),
            "non-veg" | "nonveg" | "non_veg" | "non-vegetarian" => Some(Self::NonVeg),
            _ => None,
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            AppError::invalid_input(format!("unknown diet type '{s}' (expected Veg or Non-Veg)"))
        })
    }
}

/// One row of the nutrition dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Food name
    pub name: String,
    /// Diet category
    pub category: DietType,
    /// Protein per serving (grams)
    pub protein_grams: f64,
    /// Cost per serving
    pub cost_per_serving: f64,
}

impl FoodRecord {
    /// Create a new food record
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: DietType,
        protein_grams: f64,
        cost_per_serving: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            protein_grams,
            cost_per_serving,
        }
    }

    /// Numeric features in scaler column order (protein, cost)
    #[must_use]
    pub const fn features(&self) -> [f64; 2] {
        [self.protein_grams, self.cost_per_serving]
    }
}

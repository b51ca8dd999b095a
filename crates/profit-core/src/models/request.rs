// ABOUTME: User-facing advisory request with range validation
// ABOUTME: Splits a request into the body profile and the nearest-neighbour food query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::food::DietType;
use super::profile::{BodyProfile, WorkoutLocation};
use crate::constants::{defaults, ranges};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Query point for the food matcher
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodQuery {
    /// Desired protein per meal (grams)
    pub desired_protein: f64,
    /// Desired cost per meal
    pub desired_budget: f64,
    /// Only foods of this category are returned
    pub diet: DietType,
}

impl FoodQuery {
    /// Create a new query
    #[must_use]
    pub const fn new(desired_protein: f64, desired_budget: f64, diet: DietType) -> Self {
        Self {
            desired_protein,
            desired_budget,
            diet,
        }
    }

    /// Raw features in scaler column order (protein, cost)
    #[must_use]
    pub const fn features(&self) -> [f64; 2] {
        [self.desired_protein, self.desired_budget]
    }
}

/// One interaction's worth of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorRequest {
    /// Body weight in kilograms
    pub weight_kg: u32,
    /// Height in centimeters
    pub height_cm: u32,
    /// Dietary choice
    pub diet: DietType,
    /// Budget per meal
    pub budget_per_meal: u32,
    /// Goal protein per meal (grams)
    pub goal_protein_g: u32,
    /// Workout context
    #[serde(default)]
    pub location: WorkoutLocation,
}

impl Default for AdvisorRequest {
    fn default() -> Self {
        Self {
            weight_kg: defaults::WEIGHT_KG,
            height_cm: defaults::HEIGHT_CM,
            diet: DietType::Veg,
            budget_per_meal: defaults::BUDGET_PER_MEAL,
            goal_protein_g: defaults::GOAL_PROTEIN_G,
            location: WorkoutLocation::Home,
        }
    }
}

fn check_range(field: &str, value: u32, (min, max): (u32, u32)) -> AppResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::out_of_range(field, value, min, max))
    }
}

impl AdvisorRequest {
    /// Check every numeric field against its accepted range
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        check_range("weight_kg", self.weight_kg, ranges::WEIGHT_KG)?;
        check_range("height_cm", self.height_cm, ranges::HEIGHT_CM)?;
        check_range("budget_per_meal", self.budget_per_meal, ranges::BUDGET_PER_MEAL)?;
        check_range("goal_protein_g", self.goal_protein_g, ranges::GOAL_PROTEIN_G)?;
        Ok(())
    }

    /// Body measurements for BMI
    ///
    /// # Errors
    ///
    /// Returns an error if weight or height is zero
    pub fn body_profile(&self) -> AppResult<BodyProfile> {
        BodyProfile::new(f64::from(self.weight_kg), f64::from(self.height_cm))
    }

    /// Query point for the food matcher
    #[must_use]
    pub fn food_query(&self) -> FoodQuery {
        FoodQuery::new(
            f64::from(self.goal_protein_g),
            f64::from(self.budget_per_meal),
            self.diet,
        )
    }
}

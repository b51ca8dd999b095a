// ABOUTME: Body measurement and workout context models
// ABOUTME: BodyProfile computes BMI; WorkoutLocation selects home or gym routines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the user trains
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutLocation {
    /// Hostel room or home, bodyweight only
    #[default]
    #[serde(alias = "Hostel/Home")]
    Home,
    /// Equipped gym
    #[serde(alias = "Gym")]
    Gym,
}

impl WorkoutLocation {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Hostel/Home",
            Self::Gym => "Gym",
        }
    }

    /// Parse from a command-line string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "home" | "hostel/home" => Some(Self::Home),
            "gym" => Some(Self::Gym),
            _ => None,
        }
    }
}

impl fmt::Display for WorkoutLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutLocation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            AppError::invalid_input(format!("unknown workout location '{s}' (expected home or gym)"))
        })
    }
}

/// Physical measurements used for BMI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
}

impl BodyProfile {
    /// Create a profile, rejecting non-positive measurements
    ///
    /// # Errors
    ///
    /// Returns an error if weight or height is not a positive finite number
    pub fn new(weight_kg: f64, height_cm: f64) -> Result<Self, AppError> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Weight must be positive"));
        }
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(AppError::invalid_input("Height must be positive"));
        }
        Ok(Self {
            weight_kg,
            height_cm,
        })
    }

    /// Body-mass index: weight (kg) / height (m)^2
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}

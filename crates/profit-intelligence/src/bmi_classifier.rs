// ABOUTME: BMI threshold table mapping a body-mass index to a training focus
// ABOUTME: Produces status, goal text, and rep range from three fixed ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! BMI classification
//!
//! | BMI | Status | Rep range |
//! |-----|--------|-----------|
//! | `< 18.5` | Underweight | 8-10 Reps |
//! | `18.5 ..= 24.9` | Healthy | 10-12 Reps |
//! | `> 24.9` | Overweight | 15-20 Reps |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (exclusive) of the underweight range
pub const UNDERWEIGHT_BELOW: f64 = 18.5;
/// Upper bound (inclusive) of the healthy range
pub const HEALTHY_UP_TO: f64 = 24.9;

/// Body composition status derived from BMI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiStatus {
    /// BMI below 18.5
    Underweight,
    /// BMI between 18.5 and 24.9 inclusive
    Healthy,
    /// BMI above 24.9
    Overweight,
}

impl BmiStatus {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Healthy => "Healthy Range",
            Self::Overweight => "Overweight",
        }
    }

    /// Headline verdict shown next to the BMI
    #[must_use]
    pub const fn analysis_label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy Range",
            Self::Underweight | Self::Overweight => "Adjustment Advised",
        }
    }
}

impl fmt::Display for BmiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Training focus for a BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BmiClassification {
    /// Status bucket
    pub status: BmiStatus,
    /// Goal description
    pub goal_text: &'static str,
    /// Rep range label
    pub rep_range: &'static str,
}

/// Classify a BMI value
#[must_use]
pub fn classify(bmi: f64) -> BmiClassification {
    if bmi < UNDERWEIGHT_BELOW {
        BmiClassification {
            status: BmiStatus::Underweight,
            goal_text: "Focus on Hypertrophy (Muscle Gain)",
            rep_range: "8-10 Reps",
        }
    } else if bmi <= HEALTHY_UP_TO {
        BmiClassification {
            status: BmiStatus::Healthy,
            goal_text: "Focus on Strength & Maintenance",
            rep_range: "10-12 Reps",
        }
    } else {
        BmiClassification {
            status: BmiStatus::Overweight,
            goal_text: "Focus on Metabolic Conditioning (Fat Loss)",
            rep_range: "15-20 Reps",
        }
    }
}

// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Dataset column names, request ranges, artifact file names, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Dataset column names
pub mod dataset {
    /// Food name column
    pub const FOOD_COLUMN: &str = "Food";
    /// Diet category column (`Veg` / `Non-Veg`)
    pub const TYPE_COLUMN: &str = "Type";
    /// Protein grams per serving column
    pub const PROTEIN_COLUMN: &str = "Protein";
    /// Cost per serving column
    pub const COST_COLUMN: &str = "Cost";
    /// Columns that must be present in the dataset header
    pub const REQUIRED_COLUMNS: [&str; 4] = [FOOD_COLUMN, TYPE_COLUMN, PROTEIN_COLUMN, COST_COLUMN];
    /// Numeric feature columns in the order the scaler and index use them
    pub const FEATURE_COLUMNS: [&str; 2] = [PROTEIN_COLUMN, COST_COLUMN];
}

/// Inclusive ranges accepted for user-facing request parameters
pub mod ranges {
    /// Body weight in kilograms
    pub const WEIGHT_KG: (u32, u32) = (40, 150);
    /// Height in centimeters
    pub const HEIGHT_CM: (u32, u32) = (120, 220);
    /// Budget per meal
    pub const BUDGET_PER_MEAL: (u32, u32) = (10, 150);
    /// Goal protein per meal in grams
    pub const GOAL_PROTEIN_G: (u32, u32) = (5, 60);
}

/// Default values pre-filled for an interaction
pub mod defaults {
    /// Default body weight (kg)
    pub const WEIGHT_KG: u32 = 70;
    /// Default height (cm)
    pub const HEIGHT_CM: u32 = 175;
    /// Default budget per meal
    pub const BUDGET_PER_MEAL: u32 = 60;
    /// Default goal protein (g)
    pub const GOAL_PROTEIN_G: u32 = 25;
    /// Default dataset location
    pub const DATASET_PATH: &str = "data/diet_data.csv";
    /// Default directory holding the fitted artifacts
    pub const MODELS_DIR: &str = "models";
    /// Default file name for the plain-text plan export
    pub const EXPORT_FILE_NAME: &str = "my_fitness_plan.txt";
}

/// Fitted artifact file names
pub mod artifacts {
    /// Serialized scaler parameters
    pub const SCALER_FILE: &str = "scaler.json";
    /// Serialized neighbour index with its food rows
    pub const INDEX_FILE: &str = "fitness_model.json";
}

/// Nearest-neighbour matching
pub mod matching {
    /// Number of neighbours retrieved per query
    pub const NEIGHBOR_COUNT: usize = 3;
    /// Standard deviations at or below this are treated as zero variance
    pub const MIN_STD_DEV: f64 = 1e-12;
}

/// Meal planning
pub mod meals {
    /// Meals per day used for the daily cost estimate
    pub const MEALS_PER_DAY: u32 = 3;
}

/// Service identification for structured logging
pub mod service_names {
    /// CLI service name
    pub const PROFIT_CLI: &str = "profit-cli";
}

/// Environment variable names
pub mod env_config {
    /// Dataset path override
    pub const DATASET_PATH: &str = "PROFIT_DATASET_PATH";
    /// Models directory override
    pub const MODELS_DIR: &str = "PROFIT_MODELS_DIR";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, the sample food dataset, and prebuilt artifact directories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `profit_advisor`

use profit_advisor::advisor::AdvisorService;
use profit_advisor::config::ArtifactPaths;
use profit_advisor::index_builder::IndexBuilder;
use profit_advisor::models::{AdvisorRequest, DietType, FoodRecord, WorkoutLocation};
use std::fs;
use std::path::PathBuf;
use std::sync::Once;
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Sample dataset: 11 vegetarian rows followed by 9 non-vegetarian rows
pub const SAMPLE_DATASET: &str = "\
Food,Type,Protein,Cost
Paneer Bhurji,Veg,18,60
Soya Chunks Curry,Veg,26,35
Dal Tadka with Rice,Veg,12,40
Chana Masala,Veg,15,45
Rajma Chawal,Veg,14,50
Moong Sprouts Salad,Veg,10,25
Greek Yogurt Bowl,Veg,17,90
Peanut Butter Toast,Veg,11,30
Tofu Stir Fry,Veg,20,80
Besan Chilla,Veg,13,30
Milk and Oats,Veg,12,35
Boiled Eggs (3),Non-Veg,18,24
Egg Bhurji,Non-Veg,16,40
Chicken Breast Grilled,Non-Veg,31,120
Chicken Curry with Rice,Non-Veg,24,100
Fish Curry,Non-Veg,22,110
Omelette with Toast,Non-Veg,15,35
Chicken Biryani,Non-Veg,20,130
Tuna Sandwich,Non-Veg,19,85
Mutton Keema,Non-Veg,25,150
";

/// Rows in [`SAMPLE_DATASET`]
pub const SAMPLE_ROWS: usize = 20;

/// Three rows on the diagonal, equally spaced around their mean
pub fn diagonal_records() -> Vec<FoodRecord> {
    vec![
        FoodRecord::new("Low", DietType::Veg, 10.0, 10.0),
        FoodRecord::new("Mid", DietType::NonVeg, 20.0, 20.0),
        FoodRecord::new("High", DietType::Veg, 30.0, 30.0),
    ]
}

/// Scratch directory holding a dataset file
pub struct TestWorkspace {
    pub dir: TempDir,
    pub dataset: PathBuf,
    pub paths: ArtifactPaths,
}

impl TestWorkspace {
    /// Workspace with the given CSV content written to `diet_data.csv`
    pub fn with_dataset(content: &str) -> Self {
        init_test_logging();
        let dir = TempDir::new().expect("create temp dir");
        let dataset = dir.path().join("diet_data.csv");
        fs::write(&dataset, content).expect("write dataset");
        let paths = ArtifactPaths::in_dir(dir.path().join("models"));
        Self {
            dir,
            dataset,
            paths,
        }
    }

    /// Workspace with the sample dataset
    pub fn sample() -> Self {
        Self::with_dataset(SAMPLE_DATASET)
    }

    /// Run the index builder over this workspace's dataset
    pub fn build(&self) -> &Self {
        IndexBuilder::default()
            .build_and_persist(&self.dataset, &self.paths)
            .expect("build artifacts");
        self
    }

    /// Fresh advisor service over this workspace's artifacts
    pub fn service(&self) -> AdvisorService {
        AdvisorService::new(self.paths.clone())
    }
}

/// Request with the given body and food preferences
pub fn request(
    weight_kg: u32,
    height_cm: u32,
    diet: DietType,
    budget_per_meal: u32,
    goal_protein_g: u32,
    location: WorkoutLocation,
) -> AdvisorRequest {
    AdvisorRequest {
        weight_kg,
        height_cm,
        diet,
        budget_per_meal,
        goal_protein_g,
        location,
    }
}

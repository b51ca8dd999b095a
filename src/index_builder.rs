// ABOUTME: Offline index builder fitting the scaler and nearest-neighbour index
// ABOUTME: Loads the food dataset, standardizes protein and cost, and persists both artifacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Index builder
//!
//! Run once before serving: fit the scaler on `(Protein, Cost)`, standardize
//! every row, fit the neighbour index over the standardized matrix and write
//! both artifacts. Re-running overwrites the previous pair.

use crate::artifacts::save_artifacts;
use crate::config::ArtifactPaths;
use crate::dataset::load_dataset;
use crate::logging::AdvisorLogger;
use profit_core::errors::{AppError, AppResult};
use profit_core::models::{DietType, FoodRecord};
use profit_intelligence::{FoodIndex, MatchingConfig, NeighborIndex, ScalerParams};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// What a build produced
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    /// Rows indexed
    pub rows: usize,
    /// Vegetarian rows
    pub veg_rows: usize,
    /// Non-vegetarian rows
    pub non_veg_rows: usize,
    /// Neighbours retrieved per query
    pub neighbor_count: usize,
    /// Fitted scaler parameters
    pub scaler: ScalerParams,
}

/// Fits and persists the matching artifacts
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    config: MatchingConfig,
}

impl IndexBuilder {
    /// Create a builder with the given matching configuration
    #[must_use]
    pub const fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Fit scaler and index over the records
    ///
    /// # Errors
    ///
    /// Returns `InvalidDataset` if there are no records, fewer records than
    /// the neighbour count, or non-finite feature values; `ConfigInvalid` if
    /// the matching configuration is invalid
    pub fn build(&self, records: &[FoodRecord]) -> AppResult<(ScalerParams, FoodIndex)> {
        self.config.validate()?;
        if records.is_empty() {
            return Err(AppError::invalid_dataset("dataset contains no food rows"));
        }

        let features: Vec<_> = records.iter().map(FoodRecord::features).collect();
        let scaler = ScalerParams::fit(&features)?;
        let index =
            NeighborIndex::fit(scaler.transform_all(&features), self.config.neighbor_count)?;

        Ok((
            scaler,
            FoodIndex {
                index,
                foods: records.to_vec(),
            },
        ))
    }

    /// Load the dataset, fit, and write both artifacts
    ///
    /// # Errors
    ///
    /// Returns `InvalidDataset` for any dataset problem (nothing is written),
    /// or a storage error if the artifacts cannot be persisted
    pub fn build_and_persist(
        &self,
        dataset: &Path,
        paths: &ArtifactPaths,
    ) -> AppResult<BuildSummary> {
        let started = Instant::now();
        let records = load_dataset(dataset)?;
        let (scaler, index) = self.build(&records)?;
        save_artifacts(paths, &scaler, &index)?;

        let veg_rows = records
            .iter()
            .filter(|record| record.category == DietType::Veg)
            .count();
        let summary = BuildSummary {
            rows: records.len(),
            veg_rows,
            non_veg_rows: records.len() - veg_rows,
            neighbor_count: index.index.neighbor_count(),
            scaler,
        };

        AdvisorLogger::log_index_built(
            dataset,
            summary.rows,
            summary.neighbor_count,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(summary)
    }
}

// ABOUTME: Nearest-neighbour food recommendation over standardized protein and cost
// ABOUTME: Standardizes a query, retrieves the k closest foods, and filters by diet type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food recommendation engine
//!
//! A query `(protein, budget)` is standardized with the fitted scaler, the
//! `k` nearest dataset rows are retrieved, and only rows whose category equals
//! the requested diet are kept. Filtering happens after retrieval, so a query
//! whose neighbours all belong to the other category yields no match.

use crate::algorithms::{NeighborIndex, ScalerParams};
use profit_core::errors::{AppError, AppResult};
use profit_core::models::{FoodQuery, FoodRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Neighbour index together with the food rows it was fitted over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodIndex {
    /// Fitted index over standardized features
    pub index: NeighborIndex,
    /// Food rows, position-aligned with the index points
    pub foods: Vec<FoodRecord>,
}

impl FoodIndex {
    /// Check index points and food rows line up
    ///
    /// # Errors
    ///
    /// Returns `ArtifactMismatch` if the index is invalid or the row counts differ
    pub fn validate(&self) -> AppResult<()> {
        self.index.validate()?;
        if self.index.len() != self.foods.len() {
            return Err(AppError::artifact_mismatch(format!(
                "index has {} points but {} food rows",
                self.index.len(),
                self.foods.len()
            )));
        }
        Ok(())
    }
}

/// A food returned for a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodMatch {
    /// Matched dataset row
    pub food: FoodRecord,
    /// Distance to the query in standardized space
    pub distance: f64,
}

/// Loaded scaler and index, ready to answer queries
#[derive(Debug, Clone)]
pub struct FoodRecommender {
    scaler: ScalerParams,
    catalog: FoodIndex,
}

impl FoodRecommender {
    /// Pair a scaler with the index fitted alongside it
    ///
    /// # Errors
    ///
    /// Returns `ArtifactMismatch` if either artifact is invalid or they were
    /// not fitted on the same dataset
    pub fn new(scaler: ScalerParams, catalog: FoodIndex) -> AppResult<Self> {
        scaler.validate()?;
        catalog.validate()?;
        if scaler.sample_count != catalog.foods.len() {
            return Err(AppError::artifact_mismatch(format!(
                "scaler was fitted on {} rows but the index holds {}",
                scaler.sample_count,
                catalog.foods.len()
            )));
        }
        Ok(Self { scaler, catalog })
    }

    /// Fitted scaler
    #[must_use]
    pub const fn scaler(&self) -> &ScalerParams {
        &self.scaler
    }

    /// Fitted index and food rows
    #[must_use]
    pub const fn catalog(&self) -> &FoodIndex {
        &self.catalog
    }

    /// Nearest foods matching the query's diet, nearest first
    ///
    /// An empty result means every neighbour belonged to the other category.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the query values are not finite
    pub fn recommend(&self, query: &FoodQuery) -> AppResult<Vec<FoodMatch>> {
        let raw = query.features();
        if raw.iter().any(|value| !value.is_finite()) {
            return Err(AppError::invalid_input(
                "desired protein and budget must be finite numbers",
            ));
        }

        let standardized = self.scaler.transform(raw);
        let neighbors = self.catalog.index.kneighbors(standardized);
        debug!(
            query.protein = query.desired_protein,
            query.budget = query.desired_budget,
            neighbors = neighbors.len(),
            "Nearest neighbours retrieved"
        );

        Ok(neighbors
            .into_iter()
            .filter_map(|neighbor| {
                self.catalog
                    .foods
                    .get(neighbor.position)
                    .filter(|food| food.category == query.diet)
                    .map(|food| FoodMatch {
                        food: food.clone(),
                        distance: neighbor.distance,
                    })
            })
            .collect())
    }
}

// ABOUTME: Brute-force Euclidean k-nearest-neighbour index over standardized features
// ABOUTME: Immutable once fitted; ties are broken by dataset row order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::FeatureVector;
use profit_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One query result: a dataset row and its distance to the query point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    /// Row position in the fitted dataset
    pub position: usize,
    /// Euclidean distance in standardized space
    pub distance: f64,
}

/// Fitted k-nearest-neighbour index
///
/// The dataset is a handful of rows, so a linear scan is both the simplest
/// and the fastest structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborIndex {
    neighbor_count: usize,
    points: Vec<FeatureVector>,
}

impl NeighborIndex {
    /// Fit the index by storing the standardized points
    ///
    /// # Errors
    ///
    /// Returns `InvalidDataset` if there are no points, `neighbor_count` is
    /// zero or larger than the number of points, or a coordinate is not finite
    pub fn fit(points: Vec<FeatureVector>, neighbor_count: usize) -> AppResult<Self> {
        let index = Self {
            neighbor_count,
            points,
        };
        index.check().map_err(AppError::invalid_dataset)?;
        Ok(index)
    }

    /// Number of neighbours returned per query
    #[must_use]
    pub const fn neighbor_count(&self) -> usize {
        self.neighbor_count
    }

    /// Number of fitted points
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the index holds no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Fitted standardized points in dataset order
    #[must_use]
    pub fn points(&self) -> &[FeatureVector] {
        &self.points
    }

    /// The `neighbor_count` points closest to `query`, nearest first
    #[must_use]
    pub fn kneighbors(&self, query: FeatureVector) -> Vec<Neighbor> {
        let mut neighbors: Vec<Neighbor> = self
            .points
            .iter()
            .enumerate()
            .map(|(position, point)| Neighbor {
                position,
                distance: euclidean_distance(query, *point),
            })
            .collect();

        neighbors.sort_by(|a, b| match a.distance.total_cmp(&b.distance) {
            Ordering::Equal => a.position.cmp(&b.position),
            ordering => ordering,
        });
        neighbors.truncate(self.neighbor_count);
        neighbors
    }

    /// Check a loaded index is queryable
    ///
    /// # Errors
    ///
    /// Returns `ArtifactMismatch` describing the first inconsistency
    pub fn validate(&self) -> AppResult<()> {
        self.check().map_err(AppError::artifact_mismatch)
    }

    fn check(&self) -> Result<(), String> {
        if self.points.is_empty() {
            return Err("cannot fit nearest-neighbour index on zero rows".to_owned());
        }
        if self.neighbor_count == 0 {
            return Err("neighbour count must be at least 1".to_owned());
        }
        if self.neighbor_count > self.points.len() {
            return Err(format!(
                "neighbour count {} exceeds the {} available rows",
                self.neighbor_count,
                self.points.len()
            ));
        }
        if self.points.iter().flatten().any(|value| !value.is_finite()) {
            return Err("index contains non-finite coordinates".to_owned());
        }
        Ok(())
    }
}

fn euclidean_distance(a: FeatureVector, b: FeatureVector) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx.hypot(dy)
}

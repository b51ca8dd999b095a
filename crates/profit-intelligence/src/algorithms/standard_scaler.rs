// ABOUTME: Standard scaler fitted on the food dataset's numeric columns
// ABOUTME: Stores per-feature mean and standard deviation for query-time standardization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Per-feature standardization: `z = (x - mean) / std_dev`.
//!
//! Uses the population standard deviation (divide by `n`). A feature with zero
//! variance is stored with a scale of `1.0`, so it standardizes to `0` rather
//! than dividing by zero.

use super::FeatureVector;
use profit_core::constants::{dataset::FEATURE_COLUMNS, matching::MIN_STD_DEV};
use profit_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Fitted statistics for one numeric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScale {
    /// Dataset column the statistics were computed from
    pub column: String,
    /// Column mean
    pub mean: f64,
    /// Column standard deviation (1.0 for constant columns)
    pub std_dev: f64,
}

/// Scaler parameters for the (protein, cost) feature pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    /// Statistics in feature order
    pub features: [FeatureScale; 2],
    /// Number of dataset rows the scaler was fitted on
    pub sample_count: usize,
}

impl ScalerParams {
    /// Compute mean and standard deviation of each feature
    ///
    /// # Errors
    ///
    /// Returns `InvalidDataset` if there are no rows or a value is not finite
    pub fn fit(rows: &[FeatureVector]) -> AppResult<Self> {
        if rows.is_empty() {
            return Err(AppError::invalid_dataset("cannot fit scaler on zero rows"));
        }
        if rows.iter().flatten().any(|value| !value.is_finite()) {
            return Err(AppError::invalid_dataset(
                "cannot fit scaler on non-finite feature values",
            ));
        }

        let n = rows.len() as f64;
        let features = [0, 1].map(|j| {
            let mean = rows.iter().map(|row| row[j]).sum::<f64>() / n;
            let variance = rows
                .iter()
                .map(|row| {
                    let diff = row[j] - mean;
                    diff * diff
                })
                .sum::<f64>()
                / n;
            let std_dev = variance.sqrt();
            FeatureScale {
                column: FEATURE_COLUMNS[j].to_owned(),
                mean,
                std_dev: if std_dev <= MIN_STD_DEV { 1.0 } else { std_dev },
            }
        });

        Ok(Self {
            features,
            sample_count: rows.len(),
        })
    }

    /// Standardize a raw feature vector
    #[must_use]
    pub fn transform(&self, raw: FeatureVector) -> FeatureVector {
        [0, 1].map(|j| {
            let scale = &self.features[j];
            (raw[j] - scale.mean) / scale.std_dev
        })
    }

    /// Map a standardized vector back to raw units
    #[must_use]
    pub fn inverse_transform(&self, standardized: FeatureVector) -> FeatureVector {
        [0, 1].map(|j| {
            let scale = &self.features[j];
            standardized[j].mul_add(scale.std_dev, scale.mean)
        })
    }

    /// Standardize every row
    #[must_use]
    pub fn transform_all(&self, rows: &[FeatureVector]) -> Vec<FeatureVector> {
        rows.iter().map(|row| self.transform(*row)).collect()
    }

    /// Check loaded parameters are usable for standardization
    ///
    /// # Errors
    ///
    /// Returns `ArtifactMismatch` if the columns differ from the expected
    /// feature order, a statistic is non-finite or non-positive, or the
    /// scaler was fitted on zero rows
    pub fn validate(&self) -> AppResult<()> {
        let columns = self.features.each_ref().map(|scale| scale.column.as_str());
        if columns != FEATURE_COLUMNS {
            return Err(AppError::artifact_mismatch(format!(
                "scaler columns {columns:?} do not match expected {FEATURE_COLUMNS:?}"
            )));
        }
        for scale in &self.features {
            if !scale.mean.is_finite() || !scale.std_dev.is_finite() || scale.std_dev <= 0.0 {
                return Err(AppError::artifact_mismatch(format!(
                    "scaler statistics for '{}' are invalid (mean {}, std {})",
                    scale.column, scale.mean, scale.std_dev
                )));
            }
        }
        if self.sample_count == 0 {
            return Err(AppError::artifact_mismatch("scaler was fitted on zero rows"));
        }
        Ok(())
    }
}

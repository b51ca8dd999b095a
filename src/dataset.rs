// ABOUTME: Food dataset loader for the index builder
// ABOUTME: Reads the Food/Type/Protein/Cost CSV into validated FoodRecord rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dataset loading
//!
//! The header must contain `Food`, `Type`, `Protein` and `Cost`; extra
//! columns are ignored and column order is free. Any problem aborts the load
//! with `InvalidDataset` naming the offending line.

use crate::constants::dataset::REQUIRED_COLUMNS;
use profit_core::errors::{AppError, AppResult};
use profit_core::models::{DietType, FoodRecord};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct DatasetRow {
    #[serde(rename = "Food")]
    food: String,
    #[serde(rename = "Type")]
    diet_type: String,
    #[serde(rename = "Protein")]
    protein: f64,
    #[serde(rename = "Cost")]
    cost: f64,
}

impl DatasetRow {
    fn into_record(self, line: u64) -> AppResult<FoodRecord> {
        if self.food.is_empty() {
            return Err(AppError::invalid_dataset(format!(
                "line {line}: food name is empty"
            )));
        }
        let category = DietType::from_label(&self.diet_type).ok_or_else(|| {
            AppError::invalid_dataset(format!(
                "line {line}: unknown Type '{}' (expected Veg or Non-Veg)",
                self.diet_type
            ))
        })?;
        for (column, value) in [("Protein", self.protein), ("Cost", self.cost)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_dataset(format!(
                    "line {line}: {column} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(FoodRecord::new(self.food, category, self.protein, self.cost))
    }
}

/// Load and validate the food dataset from a CSV file
///
/// # Errors
///
/// Returns `InvalidDataset` if the file cannot be opened, a required column
/// is missing, a row is malformed, or the table has no rows
pub fn load_dataset(path: &Path) -> AppResult<Vec<FoodRecord>> {
    let file = File::open(path).map_err(|e| {
        let message = if e.kind() == io::ErrorKind::NotFound {
            format!("dataset {} not found", path.display())
        } else {
            format!("cannot open dataset {}: {e}", path.display())
        };
        AppError::invalid_dataset(message).with_source(e)
    })?;
    let records = parse_dataset(file)?;
    debug!(dataset = %path.display(), rows = records.len(), "Dataset loaded");
    Ok(records)
}

/// Parse and validate CSV dataset content
///
/// # Errors
///
/// Returns `InvalidDataset` under the same conditions as [`load_dataset`]
pub fn parse_dataset(reader: impl Read) -> AppResult<Vec<FoodRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| AppError::invalid_dataset(format!("cannot read header row: {e}")))?
        .clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::invalid_dataset(format!(
            "missing required column(s): {}",
            missing.join(", ")
        ))
        .with_details(serde_json::json!({ "missing_columns": missing })));
    }

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let raw = result.map_err(|e| {
            let line = e.position().map_or(0, csv::Position::line);
            AppError::invalid_dataset(format!("line {line}: {e}"))
        })?;
        let line = raw.position().map_or(0, csv::Position::line);
        let row: DatasetRow = raw
            .deserialize(Some(&headers))
            .map_err(|e| AppError::invalid_dataset(format!("line {line}: {e}")))?;
        records.push(row.into_record(line)?);
    }

    if records.is_empty() {
        return Err(AppError::invalid_dataset("dataset contains no food rows"));
    }
    Ok(records)
}

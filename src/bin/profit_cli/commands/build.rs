// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Build command for profit-cli
// ABOUTME: Fits the scaler and neighbour index from the dataset and persists both artifacts

use crate::helpers::display::display_build_summary;
use profit_advisor::config::AdvisorConfig;
use profit_advisor::errors::AppResult;
use profit_advisor::index_builder::IndexBuilder;
use tracing::info;

/// Run the index builder
pub fn run(config: &AdvisorConfig) -> AppResult<()> {
    let paths = config.artifact_paths();
    info!(
        "Building food index from {} into {}",
        config.dataset_path.display(),
        paths.models_dir.display()
    );

    let summary = IndexBuilder::new(config.matching.clone())
        .build_and_persist(&config.dataset_path, &paths)?;
    display_build_summary(&summary, &paths);
    Ok(())
}

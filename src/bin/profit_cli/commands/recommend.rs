// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Recommend command for profit-cli
// ABOUTME: Produces one recommendation, prints it, and optionally exports the plan

use crate::helpers::display::display_export_outcome;
use profit_advisor::advisor::AdvisorService;
use profit_advisor::config::AdvisorConfig;
use profit_advisor::errors::AppResult;
use profit_advisor::models::AdvisorRequest;
use profit_advisor::report::{self, OutputFormat};
use std::path::PathBuf;

/// Options collected from the command line
pub struct RecommendOptions {
    /// Validated by the service
    pub request: AdvisorRequest,
    /// Plan file, when `--export` was given
    pub export: Option<PathBuf>,
    /// How to print the recommendation
    pub format: OutputFormat,
}

/// Advise once and render the result
pub fn run(config: &AdvisorConfig, options: &RecommendOptions) -> AppResult<()> {
    let service = AdvisorService::new(config.artifact_paths());
    let recommendation = service.advise(&options.request)?;

    print!("{}", options.format.render(&recommendation)?);

    if let Some(path) = &options.export {
        let written = report::write_export(path, &recommendation)?;
        display_export_outcome(path, written);
    }
    Ok(())
}

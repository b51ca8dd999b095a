// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Serve command for profit-cli
// ABOUTME: Runs a JSON-lines advisor session on stdin and stdout

use profit_advisor::advisor::{AdvisorService, Readiness};
use profit_advisor::config::AdvisorConfig;
use profit_advisor::errors::AppResult;
use profit_advisor::session::run_session;
use std::io;
use tracing::warn;

/// Serve requests until stdin closes
pub fn run(config: &AdvisorConfig) -> AppResult<()> {
    let service = AdvisorService::new(config.artifact_paths());

    // Load up front so a missing build is reported before the first request
    if let Readiness::Unavailable { reason, .. } = service.readiness() {
        warn!("Serving in degraded mode: {reason}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&service, stdin.lock(), stdout.lock())?;
    Ok(())
}

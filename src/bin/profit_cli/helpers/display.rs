// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for profit-cli
// ABOUTME: Provides consistent display functions for builds, exports, and errors

use profit_advisor::config::ArtifactPaths;
use profit_advisor::errors::{AppError, ErrorCode};
use profit_advisor::index_builder::BuildSummary;
use profit_advisor::report::format_quantity;
use std::path::Path;

/// Display the result of a successful index build
pub fn display_build_summary(summary: &BuildSummary, paths: &ArtifactPaths) {
    println!("\nFood Index Built Successfully!");
    println!("{}", "=".repeat(50));
    println!("DATASET:");
    println!("   Rows: {}", summary.rows);
    println!("   Veg: {}", summary.veg_rows);
    println!("   Non-Veg: {}", summary.non_veg_rows);
    println!("   Neighbours per query: {}", summary.neighbor_count);

    println!("\nSCALER:");
    for feature in &summary.scaler.features {
        println!(
            "   {}: mean {}, std {}",
            feature.column,
            format_quantity((feature.mean * 100.0).round() / 100.0),
            format_quantity((feature.std_dev * 100.0).round() / 100.0)
        );
    }

    println!("\nARTIFACTS:");
    println!("   {}", paths.scaler.display());
    println!("   {}", paths.index.display());

    println!("\nNEXT STEPS:");
    println!("   profit-cli recommend --weight 70 --height 175 --diet Veg");
}

/// Display where the plan went, or why it was not written
pub fn display_export_outcome(path: &Path, written: bool) {
    if written {
        println!("\nPlan saved to {}", path.display());
    } else {
        println!("\nNo plan saved: no foods matched your preference.");
    }
}

/// Display a command failure on stderr
pub fn display_error(error: &AppError) {
    match error.code {
        ErrorCode::ModelNotReady => {
            eprintln!("WARNING Training data not detected. Please run 'profit-cli build' first.");
            if let Some(reason) = error.details.get("reason").and_then(serde_json::Value::as_str) {
                eprintln!("   Cause: {reason}");
            }
        }
        _ => eprintln!("Error: {error}"),
    }
}

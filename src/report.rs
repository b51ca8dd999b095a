// ABOUTME: Plan report rendering for the terminal and the plain-text export file
// ABOUTME: Formats metrics, nutrition cards, and the workout protocol from a Recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan report
//!
//! Two renderings of a [`Recommendation`]: a terminal view and the
//! downloadable plan. The plan is only produced when at least one food
//! matched.

use crate::advisor::{MatchedFood, NutritionOutcome, Recommendation};
use profit_core::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

/// Title line of the exported plan
pub const REPORT_TITLE: &str = "PROFIT AI - PERSONALIZED FITNESS REPORT";

const RULE_WIDTH: usize = 40;
const CURRENCY: &str = "₹";

/// Output format selector for `recommend`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal view
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Pick the format from the `--json` flag
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }

    /// Format name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    /// Render a recommendation in this format, newline-terminated
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if JSON encoding fails
    pub fn render(self, recommendation: &Recommendation) -> AppResult<String> {
        match self {
            Self::Text => Ok(render_text(recommendation)),
            Self::Json => Ok(format!("{}\n", render_json(recommendation)?)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a dataset quantity, dropping the fraction for whole numbers
#[must_use]
pub fn format_quantity(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn nutrition_line(food: &MatchedFood) -> String {
    format!(
        "- {}: {}g Protein ({CURRENCY}{})",
        food.name,
        format_quantity(food.protein),
        format_quantity(food.cost)
    )
}

/// Plain-text plan for download, or `None` when no food matched
#[must_use]
pub fn export_text(recommendation: &Recommendation) -> Option<String> {
    if recommendation.matched_foods.is_empty() {
        return None;
    }

    let mut lines = vec![
        REPORT_TITLE.to_owned(),
        format!(
            "BMI: {} ({})",
            recommendation.bmi_display, recommendation.status_label
        ),
        format!("Diet Preference: {}", recommendation.diet),
        "=".repeat(RULE_WIDTH),
        String::new(),
        "NUTRITION PLAN:".to_owned(),
    ];
    lines.extend(recommendation.matched_foods.iter().map(nutrition_line));
    lines.push(String::new());
    lines.push(format!(
        "WORKOUT PROTOCOL ({}):",
        recommendation.location.label()
    ));
    lines.push(format!("Target Goal: {}", recommendation.goal_text));
    lines.push(format!("Rep Range: {}", recommendation.rep_range));
    lines.extend(
        recommendation
            .exercises
            .iter()
            .map(|exercise| format!(" [ ] {exercise}")),
    );

    let mut text = lines.join("\n");
    text.push('\n');
    Some(text)
}

/// Write the plan to `path`
///
/// Returns `false` without touching the file when no food matched.
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be written
pub fn write_export(path: &Path, recommendation: &Recommendation) -> AppResult<bool> {
    let Some(text) = export_text(recommendation) else {
        return Ok(false);
    };
    fs::write(path, text).map_err(|e| {
        AppError::storage(format!("cannot write plan to {}: {e}", path.display())).with_source(e)
    })?;
    info!(path = %path.display(), "Plan exported");
    Ok(true)
}

/// Terminal view of a recommendation
#[must_use]
pub fn render_text(recommendation: &Recommendation) -> String {
    let r = recommendation;
    let mut lines = vec![
        "AI Fitness Strategy Lab".to_owned(),
        "=".repeat(50),
        format!("Current BMI:     {}", r.bmi_display),
        if r.status_label == r.analysis_label {
            format!("Analysis:        {}", r.analysis_label)
        } else {
            format!("Analysis:        {} ({})", r.analysis_label, r.status_label)
        },
        format!("Est. Daily Cost: {CURRENCY}{}", r.estimated_daily_cost),
        String::new(),
        "AI Nutritional Recommendations".to_owned(),
        "-".repeat(50),
    ];

    if r.matched_foods.is_empty() {
        lines.push(NutritionOutcome::NO_MATCH_HINT.to_owned());
    }
    for food in &r.matched_foods {
        lines.push(format!("{} [{}]", food.name, food.category));
        lines.push(format!(
            "   Nutritional Value: {}g Protein",
            format_quantity(food.protein)
        ));
        lines.push(format!(
            "   Financial Impact:  {CURRENCY}{} per serving",
            format_quantity(food.cost)
        ));
    }

    lines.push(String::new());
    lines.push("AI Exercise Protocol".to_owned());
    lines.push("-".repeat(50));
    lines.push(format!("{} Strategy", r.location.label()));
    lines.push(format!("AI Goal: {}", r.goal_text));
    lines.push(format!("Intensity: High (Based on {})", r.status_label));
    lines.extend(
        r.exercises
            .iter()
            .map(|exercise| format!("  ✅ {exercise} ({})", r.rep_range)),
    );
    lines.push(format!(
        "AI Note: These exercises were selected specifically for an '{}' profile to maximize effective body composition changes.",
        r.status_label
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Serialize any report value as pretty JSON
///
/// # Errors
///
/// Returns `SerializationError` if the value cannot be serialized
pub fn render_json<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

// ABOUTME: Unit tests for the BMI threshold classifier and body profile
// ABOUTME: Validates status boundaries, goal texts, rep ranges, and BMI arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use profit_advisor::errors::ErrorCode;
use profit_advisor::models::BodyProfile;
use profit_intelligence::{classify, BmiStatus};

#[test]
fn test_bmi_formula() {
    let profile = BodyProfile::new(70.0, 175.0).unwrap();
    assert!((profile.bmi() - 22.857_142_857).abs() < 1e-6);
    assert_eq!(format!("{:.1}", profile.bmi()), "22.9");
}

#[test]
fn test_body_profile_rejects_non_positive_values() {
    let err = BodyProfile::new(0.0, 175.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(BodyProfile::new(70.0, -1.0).is_err());
    assert!(BodyProfile::new(f64::NAN, 175.0).is_err());
}

#[test]
fn test_underweight_classification() {
    let result = classify(14.69);
    assert_eq!(result.status, BmiStatus::Underweight);
    assert_eq!(result.goal_text, "Focus on Hypertrophy (Muscle Gain)");
    assert_eq!(result.rep_range, "8-10 Reps");
}

#[test]
fn test_healthy_classification() {
    let result = classify(22.86);
    assert_eq!(result.status, BmiStatus::Healthy);
    assert_eq!(result.goal_text, "Focus on Strength & Maintenance");
    assert_eq!(result.rep_range, "10-12 Reps");
    assert_eq!(result.status.label(), "Healthy Range");
}

#[test]
fn test_overweight_classification() {
    let result = classify(32.65);
    assert_eq!(result.status, BmiStatus::Overweight);
    assert_eq!(result.goal_text, "Focus on Metabolic Conditioning (Fat Loss)");
    assert_eq!(result.rep_range, "15-20 Reps");
}

#[test]
fn test_threshold_boundaries() {
    assert_eq!(classify(18.499_999).status, BmiStatus::Underweight);
    assert_eq!(classify(18.5).status, BmiStatus::Healthy);
    assert_eq!(classify(24.9).status, BmiStatus::Healthy);
    assert_eq!(classify(24.91).status, BmiStatus::Overweight);
    assert_eq!(classify(24.900_001).status, BmiStatus::Overweight);
}

#[test]
fn test_classification_uses_unrounded_value() {
    // 24.94 displays as 24.9 but is above the healthy bound
    let result = classify(24.94);
    assert_eq!(format!("{:.1}", 24.94_f64), "24.9");
    assert_eq!(result.status, BmiStatus::Overweight);
}

#[test]
fn test_analysis_label() {
    assert_eq!(BmiStatus::Healthy.analysis_label(), "Healthy Range");
    assert_eq!(BmiStatus::Underweight.analysis_label(), "Adjustment Advised");
    assert_eq!(BmiStatus::Overweight.analysis_label(), "Adjustment Advised");
}

#[test]
fn test_status_serialization() {
    let json = serde_json::to_string(&BmiStatus::Underweight).unwrap();
    assert_eq!(json, "\"underweight\"");
}

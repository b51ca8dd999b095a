// ABOUTME: Unit tests for the protein and cost standard scaler
// ABOUTME: Validates population statistics, zero-variance handling, and artifact validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use profit_advisor::errors::ErrorCode;
use profit_intelligence::{FeatureVector, ScalerParams};

const EPS: f64 = 1e-9;

fn rows() -> Vec<FeatureVector> {
    vec![[10.0, 20.0], [20.0, 40.0], [30.0, 60.0], [40.0, 80.0]]
}

#[test]
fn test_fit_uses_population_statistics() {
    let scaler = ScalerParams::fit(&rows()).unwrap();

    assert_eq!(scaler.sample_count, 4);
    assert_eq!(scaler.features[0].column, "Protein");
    assert_eq!(scaler.features[1].column, "Cost");
    assert!((scaler.features[0].mean - 25.0).abs() < EPS);
    assert!((scaler.features[1].mean - 50.0).abs() < EPS);
    // Divide by n: variance of 10,20,30,40 is 125
    assert!((scaler.features[0].std_dev - 125.0_f64.sqrt()).abs() < EPS);
    assert!((scaler.features[1].std_dev - 500.0_f64.sqrt()).abs() < EPS);
}

#[test]
fn test_transformed_columns_have_zero_mean_unit_variance() {
    let data = rows();
    let scaler = ScalerParams::fit(&data).unwrap();
    let standardized = scaler.transform_all(&data);

    for j in 0..2 {
        let n = standardized.len() as f64;
        let mean = standardized.iter().map(|row| row[j]).sum::<f64>() / n;
        let variance = standardized.iter().map(|row| row[j] * row[j]).sum::<f64>() / n;
        assert!(mean.abs() < EPS);
        assert!((variance - 1.0).abs() < EPS);
    }
}

#[test]
fn test_features_are_scaled_independently() {
    let scaler = ScalerParams::fit(&rows()).unwrap();
    let z = scaler.transform([25.0, 80.0]);
    assert!(z[0].abs() < EPS);
    assert!((z[1] - 30.0 / 500.0_f64.sqrt()).abs() < EPS);
}

#[test]
fn test_inverse_transform_recovers_raw_values() {
    let scaler = ScalerParams::fit(&rows()).unwrap();
    let raw = [17.0, 63.0];
    let back = scaler.inverse_transform(scaler.transform(raw));
    assert!((back[0] - raw[0]).abs() < EPS);
    assert!((back[1] - raw[1]).abs() < EPS);
}

#[test]
fn test_constant_column_standardizes_to_zero() {
    let scaler = ScalerParams::fit(&[[15.0, 50.0], [15.0, 70.0], [15.0, 90.0]]).unwrap();
    assert!((scaler.features[0].std_dev - 1.0).abs() < EPS);
    let z = scaler.transform([15.0, 70.0]);
    assert!(z[0].abs() < EPS);
    assert!(z[1].abs() < EPS);
}

#[test]
fn test_fit_rejects_empty_and_non_finite_rows() {
    let err = ScalerParams::fit(&[]).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidDataset);

    let err = ScalerParams::fit(&[[1.0, f64::INFINITY]]).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidDataset);
}

#[test]
fn test_validate_rejects_tampered_parameters() {
    let mut scaler = ScalerParams::fit(&rows()).unwrap();
    assert!(scaler.validate().is_ok());

    scaler.features.swap(0, 1);
    assert_eq!(
        scaler.validate().unwrap_err().code,
        ErrorCode::ArtifactMismatch
    );

    let mut scaler = ScalerParams::fit(&rows()).unwrap();
    scaler.features[1].std_dev = 0.0;
    assert_eq!(
        scaler.validate().unwrap_err().code,
        ErrorCode::ArtifactMismatch
    );
}

// ABOUTME: Unit tests for the Euclidean nearest-neighbour index and food recommender
// ABOUTME: Validates ordering, tie breaking, diet filtering, and fit-time validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::diagonal_records;
use profit_advisor::errors::ErrorCode;
use profit_advisor::index_builder::IndexBuilder;
use profit_advisor::models::{DietType, FoodQuery};
use profit_intelligence::{FoodRecommender, MatchingConfig, NeighborIndex};

#[test]
fn test_kneighbors_orders_by_distance() {
    let points = vec![[5.0, 0.0], [1.0, 0.0], [3.0, 0.0], [0.0, 2.0]];
    let index = NeighborIndex::fit(points, 3).unwrap();
    let neighbors = index.kneighbors([0.0, 0.0]);

    let positions: Vec<usize> = neighbors.iter().map(|n| n.position).collect();
    assert_eq!(positions, vec![1, 3, 2]);
    assert!((neighbors[0].distance - 1.0).abs() < 1e-12);
    assert!((neighbors[2].distance - 3.0).abs() < 1e-12);
}

#[test]
fn test_ties_break_by_row_order() {
    let points = vec![[1.0, 1.0], [0.0, 0.0], [-1.0, -1.0], [1.0, -1.0]];
    let index = NeighborIndex::fit(points, 3).unwrap();
    let positions: Vec<usize> = index
        .kneighbors([0.0, 0.0])
        .iter()
        .map(|n| n.position)
        .collect();
    assert_eq!(positions, vec![1, 0, 2]);
}

#[test]
fn test_query_is_deterministic() {
    let points = vec![[0.5, 0.1], [0.2, 0.9], [0.7, 0.3], [0.4, 0.4]];
    let index = NeighborIndex::fit(points, 3).unwrap();
    let first = index.kneighbors([0.3, 0.3]);
    for _ in 0..10 {
        assert_eq!(index.kneighbors([0.3, 0.3]), first);
    }
}

#[test]
fn test_fit_validation() {
    let err = NeighborIndex::fit(vec![], 3).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidDataset);

    let err = NeighborIndex::fit(vec![[0.0, 0.0], [1.0, 1.0]], 3).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidDataset);
    assert!(err.message.contains("exceeds"));

    let err = NeighborIndex::fit(vec![[0.0, 0.0]], 0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidDataset);

    let err = NeighborIndex::fit(vec![[0.0, f64::NAN]], 1).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidDataset);
}

#[test]
fn test_serialized_index_round_trips() {
    let index = NeighborIndex::fit(vec![[0.5, -1.25], [2.0, 0.0], [-0.75, 3.5]], 3).unwrap();
    let json = serde_json::to_string(&index).unwrap();
    let restored: NeighborIndex = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, index);
    assert_eq!(restored.kneighbors([0.0, 0.0]), index.kneighbors([0.0, 0.0]));
}

fn diagonal_recommender() -> FoodRecommender {
    let (scaler, index) = IndexBuilder::default().build(&diagonal_records()).unwrap();
    FoodRecommender::new(scaler, index).unwrap()
}

#[test]
fn test_recommend_filters_neighbours_by_diet() {
    let recommender = diagonal_recommender();

    // Query sits on the middle row; the outer rows tie and keep dataset order
    let veg = recommender
        .recommend(&FoodQuery::new(20.0, 20.0, DietType::Veg))
        .unwrap();
    let names: Vec<&str> = veg.iter().map(|m| m.food.name.as_str()).collect();
    assert_eq!(names, vec!["Low", "High"]);
    assert!((veg[0].distance - veg[1].distance).abs() < 1e-12);

    let non_veg = recommender
        .recommend(&FoodQuery::new(20.0, 20.0, DietType::NonVeg))
        .unwrap();
    assert_eq!(non_veg.len(), 1);
    assert_eq!(non_veg[0].food.name, "Mid");
    assert!(non_veg[0].distance.abs() < 1e-12);
}

#[test]
fn test_recommend_with_smaller_neighbourhood() {
    let (scaler, index) = IndexBuilder::new(MatchingConfig { neighbor_count: 1 })
        .build(&diagonal_records())
        .unwrap();
    let recommender = FoodRecommender::new(scaler, index).unwrap();

    // Nearest row is non-vegetarian, so a vegetarian query matches nothing
    let matches = recommender
        .recommend(&FoodQuery::new(21.0, 19.0, DietType::Veg))
        .unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_recommend_rejects_non_finite_query() {
    let recommender = diagonal_recommender();
    let err = recommender
        .recommend(&FoodQuery::new(f64::NAN, 20.0, DietType::Veg))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_recommender_rejects_mismatched_pair() {
    let (scaler, _) = IndexBuilder::default().build(&diagonal_records()).unwrap();
    let mut records = diagonal_records();
    let duplicate = records[0].clone();
    records.push(duplicate);
    let (_, bigger_index) = IndexBuilder::default().build(&records).unwrap();

    let err = FoodRecommender::new(scaler, bigger_index).unwrap_err();
    assert_eq!(err.code, ErrorCode::ArtifactMismatch);
}

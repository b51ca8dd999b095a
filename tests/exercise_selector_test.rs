// ABOUTME: Unit tests for the static workout lookup table
// ABOUTME: Validates every status and location pair returns its fixed five-exercise list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use profit_advisor::models::WorkoutLocation;
use profit_intelligence::{select_exercises, BmiStatus};
use std::collections::HashSet;

const STATUSES: [BmiStatus; 3] = [
    BmiStatus::Underweight,
    BmiStatus::Healthy,
    BmiStatus::Overweight,
];
const LOCATIONS: [WorkoutLocation; 2] = [WorkoutLocation::Home, WorkoutLocation::Gym];

#[test]
fn test_every_protocol_has_five_distinct_exercises() {
    for status in STATUSES {
        for location in LOCATIONS {
            let list = select_exercises(status, location);
            let unique: HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), 5, "{status:?}/{location:?} has duplicates");
        }
    }
}

#[test]
fn test_healthy_home_protocol() {
    assert_eq!(
        select_exercises(BmiStatus::Healthy, WorkoutLocation::Home),
        &[
            "Standard Pushups",
            "Air Squats",
            "Bicycle Crunches",
            "Pike Pushups",
            "Superman Extensions",
        ]
    );
}

#[test]
fn test_underweight_gym_protocol() {
    assert_eq!(
        select_exercises(BmiStatus::Underweight, WorkoutLocation::Gym),
        &[
            "Barbell Squats",
            "Incline Bench Press",
            "Deadlifts",
            "Lat Pulldowns",
            "Bicep Curls",
        ]
    );
}

#[test]
fn test_overweight_protocols() {
    let gym = select_exercises(BmiStatus::Overweight, WorkoutLocation::Gym);
    let home = select_exercises(BmiStatus::Overweight, WorkoutLocation::Home);
    assert_eq!(gym[0], "Kettlebell Swings");
    assert_eq!(home[0], "Jumping Jacks");
    // Fat loss lists share conditioning moves across locations
    assert!(gym.contains(&"Burpees") && home.contains(&"Burpees"));
}

#[test]
fn test_lists_differ_per_cell() {
    let mut seen = HashSet::new();
    for status in STATUSES {
        for location in LOCATIONS {
            assert!(seen.insert(select_exercises(status, location)));
        }
    }
}

#[test]
fn test_location_parsing_and_label() {
    assert_eq!(WorkoutLocation::parse("Hostel/Home"), Some(WorkoutLocation::Home));
    assert_eq!(WorkoutLocation::parse("GYM"), Some(WorkoutLocation::Gym));
    assert_eq!(WorkoutLocation::parse("park"), None);
    assert_eq!(WorkoutLocation::parse("hostel"), None);
    assert_eq!(WorkoutLocation::Home.label(), "Hostel/Home");
    assert_eq!(WorkoutLocation::default(), WorkoutLocation::Home);
}

#[test]
fn test_location_accepts_canonical_names_and_form_label() {
    let parse = |raw: &str| serde_json::from_str::<WorkoutLocation>(raw);
    assert_eq!(parse(r#""home""#).unwrap(), WorkoutLocation::Home);
    assert_eq!(parse(r#""Hostel/Home""#).unwrap(), WorkoutLocation::Home);
    assert_eq!(parse(r#""gym""#).unwrap(), WorkoutLocation::Gym);
    assert_eq!(parse(r#""Gym""#).unwrap(), WorkoutLocation::Gym);
    for rejected in [r#""Home""#, r#""hostel""#, r#""park""#] {
        assert!(parse(rejected).is_err(), "{rejected} should be rejected");
    }
}

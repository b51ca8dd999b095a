// ABOUTME: Fixed workout lists keyed by BMI status and workout location
// ABOUTME: Muscle gain, strength, and fat loss protocols for home and gym
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::bmi_classifier::BmiStatus;
use profit_core::models::WorkoutLocation;

/// Exercises per protocol
pub const EXERCISES_PER_PROTOCOL: usize = 5;

/// A fixed, ordered list of exercise names
pub type Protocol = [&'static str; EXERCISES_PER_PROTOCOL];

// Muscle gain
const UNDERWEIGHT_GYM: Protocol = [
    "Barbell Squats",
    "Incline Bench Press",
    "Deadlifts",
    "Lat Pulldowns",
    "Bicep Curls",
];
const UNDERWEIGHT_HOME: Protocol = [
    "Bulgarian Split Squats",
    "Diamond Pushups",
    "Doorway Rows",
    "Plank",
    "Bodyweight Lunges",
];

// Strength
const HEALTHY_GYM: Protocol = [
    "Overhead Press",
    "Leg Press",
    "Seated Rows",
    "Chest Flys",
    "Tricep Extensions",
];
const HEALTHY_HOME: Protocol = [
    "Standard Pushups",
    "Air Squats",
    "Bicycle Crunches",
    "Pike Pushups",
    "Superman Extensions",
];

// Fat loss
const OVERWEIGHT_GYM: Protocol = [
    "Kettlebell Swings",
    "Rowing Machine",
    "Goblet Squats",
    "Burpees",
    "Mountain Climbers",
];
const OVERWEIGHT_HOME: Protocol = [
    "Jumping Jacks",
    "Burpees",
    "Mountain Climbers",
    "High Knees",
    "Plank Jacks",
];

/// Ordered workout list for a status and location
#[must_use]
pub const fn select_exercises(status: BmiStatus, location: WorkoutLocation) -> &'static Protocol {
    match (status, location) {
        (BmiStatus::Underweight, WorkoutLocation::Gym) => &UNDERWEIGHT_GYM,
        (BmiStatus::Underweight, WorkoutLocation::Home) => &UNDERWEIGHT_HOME,
        (BmiStatus::Healthy, WorkoutLocation::Gym) => &HEALTHY_GYM,
        (BmiStatus::Healthy, WorkoutLocation::Home) => &HEALTHY_HOME,
        (BmiStatus::Overweight, WorkoutLocation::Gym) => &OVERWEIGHT_GYM,
        (BmiStatus::Overweight, WorkoutLocation::Home) => &OVERWEIGHT_HOME,
    }
}

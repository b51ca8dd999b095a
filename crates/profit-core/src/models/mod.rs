// ABOUTME: Core data models shared by the builder, the engine, and the CLI
// ABOUTME: Re-exports food, body profile, and request types

/// Food records and diet categories
pub mod food;
/// Body measurements and workout location
pub mod profile;
/// User-facing request and the per-request food query
pub mod request;

pub use food::{DietType, FoodRecord};
pub use profile::{BodyProfile, WorkoutLocation};
pub use request::{AdvisorRequest, FoodQuery};

// ABOUTME: Numeric algorithms behind the food matcher
// ABOUTME: Contains the standard scaler and the Euclidean nearest-neighbour index

/// Two-feature points in scaler column order (protein, cost)
pub type FeatureVector = [f64; 2];

/// Brute-force Euclidean k-nearest-neighbour index
pub mod nearest_neighbors;
/// Per-feature standardization (zero mean, unit variance)
pub mod standard_scaler;

pub use nearest_neighbors::{Neighbor, NeighborIndex};
pub use standard_scaler::{FeatureScale, ScalerParams};

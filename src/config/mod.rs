// ABOUTME: Configuration management for the advisor CLI
// ABOUTME: Environment-driven paths for the dataset and the fitted artifacts

/// Environment-based configuration
pub mod environment;

pub use environment::{AdvisorConfig, ArtifactPaths, Environment};

// ABOUTME: Configuration module for profit-intelligence crate
// ABOUTME: Matching configuration and its validation error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration validation errors
pub mod error;

pub use error::ConfigError;

use profit_core::constants::matching::NEIGHBOR_COUNT;
use serde::{Deserialize, Serialize};

/// Nearest-neighbour matching configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Neighbours retrieved before the diet filter is applied
    pub neighbor_count: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            neighbor_count: NEIGHBOR_COUNT,
        }
    }
}

impl MatchingConfig {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the neighbour count is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.neighbor_count == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "neighbor_count must be at least 1",
            ));
        }
        Ok(())
    }
}

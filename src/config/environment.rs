// ABOUTME: Environment configuration management for dataset and model artifact locations
// ABOUTME: Handles environment variables, deployment modes, and command-line overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{artifacts, defaults, env_config};
use profit_core::errors::{AppError, AppResult};
use profit_intelligence::MatchingConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Locations of the two fitted artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPaths {
    /// Directory holding both artifacts
    pub models_dir: PathBuf,
    /// Serialized scaler parameters
    pub scaler: PathBuf,
    /// Serialized neighbour index and food rows
    pub index: PathBuf,
}

impl ArtifactPaths {
    /// Standard artifact file names inside `models_dir`
    #[must_use]
    pub fn in_dir(models_dir: impl AsRef<Path>) -> Self {
        let models_dir = models_dir.as_ref().to_path_buf();
        Self {
            scaler: models_dir.join(artifacts::SCALER_FILE),
            index: models_dir.join(artifacts::INDEX_FILE),
            models_dir,
        }
    }
}

/// Advisor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Food dataset read by the index builder
    pub dataset_path: PathBuf,
    /// Directory holding the fitted artifacts
    pub models_dir: PathBuf,
    /// Deployment environment
    pub environment: Environment,
    /// Nearest-neighbour matching settings
    pub matching: MatchingConfig,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(defaults::DATASET_PATH),
            models_dir: PathBuf::from(defaults::MODELS_DIR),
            environment: Environment::Development,
            matching: MatchingConfig::default(),
        }
    }
}

fn path_from_env(name: &str, default: &str) -> AppResult<PathBuf> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => {
            Err(AppError::config(format!("{name} is set but empty")))
        }
        Ok(value) => Ok(PathBuf::from(value)),
        Err(env::VarError::NotPresent) => Ok(PathBuf::from(default)),
        Err(env::VarError::NotUnicode(_)) => {
            Err(AppError::config(format!("{name} is not valid UTF-8")))
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a path variable is empty or not UTF-8
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            dataset_path: path_from_env(env_config::DATASET_PATH, defaults::DATASET_PATH)?,
            models_dir: path_from_env(env_config::MODELS_DIR, defaults::MODELS_DIR)?,
            environment: env::var(env_config::ENVIRONMENT)
                .map(|value| Environment::from_str_or_default(&value))
                .unwrap_or_default(),
            matching: MatchingConfig::default(),
        };
        config.validate()?;
        debug!(
            dataset = %config.dataset_path.display(),
            models_dir = %config.models_dir.display(),
            environment = %config.environment,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(
        mut self,
        dataset: Option<PathBuf>,
        models_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(dataset) = dataset {
            self.dataset_path = dataset;
        }
        if let Some(models_dir) = models_dir {
            self.models_dir = models_dir;
        }
        self
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the matching settings are invalid
    pub fn validate(&self) -> AppResult<()> {
        self.matching.validate()?;
        Ok(())
    }

    /// Artifact locations derived from the models directory
    #[must_use]
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::in_dir(&self.models_dir)
    }
}

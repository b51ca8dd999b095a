// ABOUTME: Advisor service composing BMI classification, exercise selection, and food matching
// ABOUTME: Loads the fitted artifacts once on first use and degrades to not-ready on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Advisor Service
//!
//! [`AdvisorService`] owns a load-once model slot. The first request that
//! needs food matching loads both artifacts; the outcome, ready or
//! unavailable with its cause, is kept for the lifetime of the service.
//! While unavailable every recommendation request fails with
//! `ModelNotReady`.

use crate::artifacts::load_artifacts;
use crate::config::ArtifactPaths;
use crate::constants::meals::MEALS_PER_DAY;
use crate::logging::AdvisorLogger;
use profit_core::errors::{AppError, AppResult, ErrorCode};
use profit_core::models::{AdvisorRequest, DietType, FoodQuery, WorkoutLocation};
use profit_intelligence::{classify, select_exercises, BmiStatus, FoodMatch, FoodRecommender};
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

/// Why the model could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
struct LoadFailure {
    code: ErrorCode,
    message: String,
}

impl LoadFailure {
    fn to_error(&self) -> AppError {
        AppError::model_not_ready(&AppError::new(self.code, self.message.clone()))
    }
}

impl From<AppError> for LoadFailure {
    fn from(error: AppError) -> Self {
        Self {
            code: error.code,
            message: error.message,
        }
    }
}

/// Model availability as seen by callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Readiness {
    /// Artifacts loaded
    Ready {
        /// Food rows in the loaded index
        rows: usize,
    },
    /// Artifacts could not be loaded
    Unavailable {
        /// Underlying load failure
        cause: ErrorCode,
        /// Human-readable reason
        reason: String,
    },
}

impl Readiness {
    /// Whether recommendations can be served
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// A matched food as presented to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedFood {
    /// Food name
    pub name: String,
    /// Diet category
    pub category: DietType,
    /// Protein per serving (grams)
    pub protein: f64,
    /// Cost per serving
    pub cost: f64,
    /// Distance to the query in standardized space
    pub distance: f64,
}

impl From<FoodMatch> for MatchedFood {
    fn from(matched: FoodMatch) -> Self {
        Self {
            name: matched.food.name,
            category: matched.food.category,
            protein: matched.food.protein_grams,
            cost: matched.food.cost_per_serving,
            distance: matched.distance,
        }
    }
}

/// Outcome of the nutrition half of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionOutcome {
    /// At least one food matched the diet preference
    Matched,
    /// Every neighbour belonged to the other diet category
    NoMatch,
}

impl NutritionOutcome {
    /// Message shown when nothing matched
    pub const NO_MATCH_HINT: &'static str =
        "No exact matches found. Try adjusting your protein/budget sliders.";
}

/// Full advice for one interaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Unrounded body-mass index
    pub bmi: f64,
    /// BMI rounded to one decimal for display
    pub bmi_display: String,
    /// Status bucket
    pub status: BmiStatus,
    /// Status label
    pub status_label: &'static str,
    /// Headline verdict
    pub analysis_label: &'static str,
    /// Budget per meal times meals per day
    pub estimated_daily_cost: u32,
    /// Requested diet
    pub diet: DietType,
    /// Workout context
    pub location: WorkoutLocation,
    /// Matched foods, nearest first
    pub matched_foods: Vec<MatchedFood>,
    /// Whether any food matched
    pub nutrition: NutritionOutcome,
    /// Workout list for the status and location
    pub exercises: Vec<&'static str>,
    /// Training goal
    pub goal_text: &'static str,
    /// Rep range label
    pub rep_range: &'static str,
}

/// Advisor service holding the lazily loaded recommender
#[derive(Debug)]
pub struct AdvisorService {
    paths: ArtifactPaths,
    model: OnceLock<Result<FoodRecommender, LoadFailure>>,
}

impl AdvisorService {
    /// Create a service reading artifacts from `paths`; nothing is loaded yet
    #[must_use]
    pub const fn new(paths: ArtifactPaths) -> Self {
        Self {
            paths,
            model: OnceLock::new(),
        }
    }

    /// Create a service around an already fitted recommender
    #[must_use]
    pub fn with_recommender(paths: ArtifactPaths, recommender: FoodRecommender) -> Self {
        Self {
            paths,
            model: OnceLock::from(Ok(recommender)),
        }
    }

    /// Artifact locations this service reads
    #[must_use]
    pub const fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    fn model(&self) -> &Result<FoodRecommender, LoadFailure> {
        self.model.get_or_init(|| {
            let loaded = load_artifacts(&self.paths);
            AdvisorLogger::log_artifact_load(
                &self.paths.models_dir,
                loaded
                    .as_ref()
                    .map(|recommender| recommender.catalog().foods.len())
                    .map_err(|e| e.code),
            );
            loaded.map_err(LoadFailure::from)
        })
    }

    /// Load the artifacts if not yet attempted and report availability
    #[must_use]
    pub fn readiness(&self) -> Readiness {
        match self.model() {
            Ok(recommender) => Readiness::Ready {
                rows: recommender.catalog().foods.len(),
            },
            Err(failure) => Readiness::Unavailable {
                cause: failure.code,
                reason: failure.message.clone(),
            },
        }
    }

    /// Loaded recommender
    ///
    /// # Errors
    ///
    /// Returns `ModelNotReady` carrying the load failure as its cause
    pub fn ensure_loaded(&self) -> AppResult<&FoodRecommender> {
        self.model().as_ref().map_err(LoadFailure::to_error)
    }

    /// Nearest foods for a query, filtered by diet
    ///
    /// # Errors
    ///
    /// Returns `ModelNotReady` if the artifacts are unavailable, or
    /// `InvalidInput` if the query is not finite
    pub fn recommend_foods(&self, query: &FoodQuery) -> AppResult<Vec<FoodMatch>> {
        self.ensure_loaded()?.recommend(query)
    }

    /// Full advice for one request
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if a request field is outside its range, or
    /// `ModelNotReady` if the artifacts are unavailable
    pub fn advise(&self, request: &AdvisorRequest) -> AppResult<Recommendation> {
        let started = Instant::now();
        request.validate()?;
        let recommender = self.ensure_loaded()?;

        let bmi = request.body_profile()?.bmi();
        let classification = classify(bmi);
        let exercises = select_exercises(classification.status, request.location).to_vec();

        let matched_foods: Vec<MatchedFood> = recommender
            .recommend(&request.food_query())?
            .into_iter()
            .map(MatchedFood::from)
            .collect();
        let nutrition = if matched_foods.is_empty() {
            NutritionOutcome::NoMatch
        } else {
            NutritionOutcome::Matched
        };

        let recommendation = Recommendation {
            bmi,
            bmi_display: format!("{bmi:.1}"),
            status: classification.status,
            status_label: classification.status.label(),
            analysis_label: classification.status.analysis_label(),
            estimated_daily_cost: request.budget_per_meal * MEALS_PER_DAY,
            diet: request.diet,
            location: request.location,
            matched_foods,
            nutrition,
            exercises,
            goal_text: classification.goal_text,
            rep_range: classification.rep_range,
        };

        AdvisorLogger::log_recommendation(
            bmi,
            recommendation.status_label,
            recommendation.matched_foods.len(),
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        );
        Ok(recommendation)
    }
}

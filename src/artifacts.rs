// ABOUTME: Persistence of the fitted scaler and neighbour index
// ABOUTME: Stages both artifacts before replacing either so failed builds leave no partial output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Artifact persistence
//!
//! Both artifacts are JSON. A save writes each artifact to a sibling
//! `.tmp` file first and renames them into place only after both writes
//! succeeded.

use crate::config::ArtifactPaths;
use profit_core::errors::{AppError, AppResult};
use profit_intelligence::{FoodIndex, FoodRecommender, ScalerParams};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(OsString::new, ToOwned::to_owned);
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::missing_artifact(path.display()).with_source(e),
        _ => AppError::corrupt_artifact(path.display(), &e).with_source(e),
    })?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::corrupt_artifact(path.display(), &e).with_source(e))
}

fn discard_staged(staged: &[PathBuf]) {
    for path in staged {
        // Best effort: the staged file may not exist yet
        let _ = fs::remove_file(path);
    }
}

/// Persist a fitted scaler and index, replacing any previous pair
///
/// # Errors
///
/// Returns `StorageError` or `SerializationError` if either artifact cannot
/// be written; previously persisted artifacts are left untouched
pub fn save_artifacts(
    paths: &ArtifactPaths,
    scaler: &ScalerParams,
    index: &FoodIndex,
) -> AppResult<()> {
    fs::create_dir_all(&paths.models_dir)?;

    let staged_scaler = staging_path(&paths.scaler);
    let staged_index = staging_path(&paths.index);
    let staged = [staged_scaler.clone(), staged_index.clone()];

    let written =
        write_json(&staged_scaler, scaler).and_then(|()| write_json(&staged_index, index));
    if let Err(e) = written {
        discard_staged(&staged);
        return Err(e);
    }

    if let Err(e) = fs::rename(&staged_scaler, &paths.scaler)
        .and_then(|()| fs::rename(&staged_index, &paths.index))
    {
        discard_staged(&staged);
        return Err(AppError::from(e));
    }

    debug!(
        scaler = %paths.scaler.display(),
        index = %paths.index.display(),
        "Artifacts written"
    );
    Ok(())
}

/// Load the scaler and index and pair them into a recommender
///
/// # Errors
///
/// Returns `MissingArtifact` if a file does not exist, `CorruptArtifact` if
/// it cannot be read or decoded, and `ArtifactMismatch` if the two were not
/// fitted together
pub fn load_artifacts(paths: &ArtifactPaths) -> AppResult<FoodRecommender> {
    let scaler: ScalerParams = read_json(&paths.scaler)?;
    let index: FoodIndex = read_json(&paths.index)?;
    FoodRecommender::new(scaler, index)
}

// ABOUTME: Line-oriented JSON session answering advisor requests over a reader and writer
// ABOUTME: Reads one AdvisorRequest per line and writes one JSON response per line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! JSON-lines session
//!
//! Blank lines are skipped. A line that is not a valid request gets an
//! `INVALID_INPUT` error response; the session keeps going. The advisor
//! service is shared across the whole session so artifacts load once.

use crate::advisor::{AdvisorService, Recommendation};
use profit_core::errors::{AppError, AppResult, ErrorResponse};
use profit_core::models::AdvisorRequest;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// One response line
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionResponse {
    /// Request answered
    Ok {
        /// The advice
        recommendation: Box<Recommendation>,
    },
    /// Request rejected
    Error {
        /// Why
        error: ErrorResponse,
    },
}

impl From<AppResult<Recommendation>> for SessionResponse {
    fn from(result: AppResult<Recommendation>) -> Self {
        match result {
            Ok(recommendation) => Self::Ok {
                recommendation: Box::new(recommendation),
            },
            Err(error) => Self::Error {
                error: error.into(),
            },
        }
    }
}

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Requests answered successfully
    pub answered: usize,
    /// Requests rejected
    pub rejected: usize,
}

/// Answer a single request line
#[must_use]
pub fn handle_line(service: &AdvisorService, line: &str) -> SessionResponse {
    let request = serde_json::from_str::<AdvisorRequest>(line).map_err(|e| {
        debug!("Failed to parse request: {e}");
        AppError::invalid_input(format!("malformed request: {e}"))
    });
    request.and_then(|request| service.advise(&request)).into()
}

/// Run a session until the reader is exhausted
///
/// # Errors
///
/// Returns `StorageError` if reading input or writing a response fails
pub fn run_session<R: BufRead, W: Write>(
    service: &AdvisorService,
    reader: R,
    mut writer: W,
) -> AppResult<SessionStats> {
    info!("Advisor session started");
    let mut stats = SessionStats::default();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(service, &line);
        match response {
            SessionResponse::Ok { .. } => stats.answered += 1,
            SessionResponse::Error { .. } => stats.rejected += 1,
        }
        serde_json::to_writer(&mut writer, &response)?;
        writeln!(writer)?;
        writer.flush()?;
    }

    info!(
        session.answered = stats.answered,
        session.rejected = stats.rejected,
        "Advisor session ended"
    );
    Ok(stats)
}

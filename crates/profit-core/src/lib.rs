// ABOUTME: Core types and constants for the ProFit advisor
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ProFit Core
//!
//! Foundation crate providing shared types and constants for the ProFit
//! advisor. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Dataset columns, request ranges, and artifact names
//! - **models**: Food records, diet and location enums, body profile, requests

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FoodRecord`, `DietType`, `BodyProfile`, `AdvisorRequest`)
pub mod models;

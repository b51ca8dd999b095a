// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for profit-cli
// ABOUTME: Provides access to the build, recommend, and serve commands

pub mod build;
pub mod recommend;
pub mod serve;

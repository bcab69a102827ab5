// ABOUTME: Unified error handling for the analytics core
// ABOUTME: Precondition violations are errors; insufficient data never is
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T, E = IntelligenceError> = std::result::Result<T, E>;

/// Errors produced by the analytics core.
///
/// All failures are local and deterministic: recomputation with the same
/// inputs reproduces the same error. Insufficient data is deliberately not
/// represented here — it yields empty/neutral results so callers can render
/// a "not enough data yet" state.
#[derive(Debug, Error)]
pub enum IntelligenceError {
    /// The goal definition itself is invalid (e.g. target date before
    /// creation date). Not retried without fixing the goal.
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    /// An input value was outside the range the operation can work with
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IntelligenceError {
    /// Create an invalid-goal error
    pub fn invalid_goal(message: impl Into<String>) -> Self {
        Self::InvalidGoal(message.into())
    }

    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

// ABOUTME: Running analytics core for goal progress tracking and training insights
// ABOUTME: Pure, synchronous computations over in-memory activity records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! Analytics core that turns a history of running activity records into
//! progress-tracked goals with completion projections and a ranked set of
//! statistically grounded training insights.
//!
//! The crate deliberately owns no I/O: an ingestion collaborator supplies
//! `ActivityRecord`s, the presentation layer supplies `Goal`s and a clock,
//! and both consume the computed results. Every entry point is a pure,
//! synchronous function — identical inputs always yield identical output.
//!
//! ## Modules
//!
//! - **models**: input data structures (`ActivityRecord`, `Goal`)
//! - **quality**: sensor/GPS-error rejection that gates all analysis
//! - **progress**: goal progress calculation and completion projection
//! - **insights**: the pattern-detector battery, scoring, and ranking
//! - **errors**: unified error type for precondition violations

/// Application constants and analysis thresholds organized by domain
pub mod constants;

/// Engine configuration and tuning knobs
pub mod config;

/// Unified error handling for the analytics core
pub mod errors;

/// Input data models (`ActivityRecord`, `Goal`, and friends)
pub mod models;

/// Quality filter removing sensor/GPS-error records before analysis
pub mod quality;

/// Goal progress calculation, projection, and coaching recommendations
pub mod progress;

/// Insight detector battery, prioritization scoring, and ranking
pub mod insights;

pub use config::InsightEngineConfig;
pub use errors::{IntelligenceError, Result};
pub use insights::{
    filter_insights, DataQuality, Difficulty, Insight, InsightCategory, InsightEngine,
    InsightFilter, InsightPriority, InsightTimeframe,
};
pub use models::{
    ActivityRecord, ActivityRecordBuilder, Goal, GoalPriority, GoalStatus, GoalType, GoalUnit,
    WeatherSnapshot,
};
pub use progress::{
    calculate_progress, calculate_progress_with_tolerance, validate_goal, GoalProgress,
    GoalValidation,
};
pub use quality::{
    filter_by_timeframe, filter_for_pace_goal, filter_stats, filter_valid_records, FilterStats,
    RejectionReason,
};

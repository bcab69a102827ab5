// ABOUTME: Input data models for the analytics core
// ABOUTME: Activity records from ingestion, goals from the presentation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

/// Completed exercise sessions and their metadata
pub mod activity;

/// User-defined training goals
pub mod goal;

pub use activity::{ActivityRecord, ActivityRecordBuilder, WeatherSnapshot};
pub use goal::{Goal, GoalPriority, GoalStatus, GoalType, GoalUnit};

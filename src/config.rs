// ABOUTME: Configuration for the insight engine with sensible defaults
// ABOUTME: All knobs optional; callers own validation of out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

use crate::constants::goal_progress::PACE_DISTANCE_TOLERANCE;
use serde::{Deserialize, Serialize};

/// Configuration for insight generation.
///
/// The core trusts these values; out-of-range configuration is the caller's
/// responsibility. Defaults match the documented behavior of the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightEngineConfig {
    /// Minimum quality-filtered records before any insight is generated
    pub min_sample_size: usize,

    /// Minimum self-reported confidence for an insight to survive scoring
    pub min_confidence: f64,

    /// Maximum number of insights returned. Default of seven matches
    /// short-term-memory capacity heuristics (Miller, 1956).
    pub max_insights: usize,

    /// Whether achievement-category insights (PRs, milestones) are included
    pub include_achievements: bool,

    /// Tolerance band around a race distance when matching comparable
    /// efforts; hosts pass this to
    /// [`calculate_progress_with_tolerance`](crate::progress::calculate_progress_with_tolerance)
    /// or [`filter_for_pace_goal`](crate::quality::filter_for_pace_goal)
    pub pace_distance_tolerance: f64,
}

impl Default for InsightEngineConfig {
    fn default() -> Self {
        Self {
            min_sample_size: 3,
            min_confidence: 0.5,
            max_insights: 7,
            include_achievements: true,
            pace_distance_tolerance: PACE_DISTANCE_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_values() {
        let config = InsightEngineConfig::default();
        assert_eq!(config.min_sample_size, 3);
        assert_eq!(config.max_insights, 7);
        assert!(config.include_achievements);
        assert!((config.pace_distance_tolerance - 0.10).abs() < f64::EPSILON);
    }
}

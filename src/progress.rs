// ABOUTME: Goal progress calculation with completion projection and coaching text
// ABOUTME: Pure and deterministic; the clock is always an explicit parameter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

//! Goal progress tracking against a linear time-based schedule.
//!
//! Progress is recomputed from scratch on every call and never cached as a
//! standalone entity. `now` is injectable so results are reproducible.

use crate::constants::goal_progress::{
    MAX_DISTANCE_TARGET_METERS, MAX_PROJECTION_MULTIPLIER, MAX_RUN_COUNT_TARGET, ON_TRACK_RATIO,
    PACE_DISTANCE_TOLERANCE, RESCOPE_DAYS_REMAINING, RESCOPE_PROGRESS_PERCENT,
};
use crate::errors::{IntelligenceError, Result};
use crate::models::{ActivityRecord, Goal, GoalType};
use crate::quality::{filter_by_timeframe, filter_for_pace_goal};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Derived progress state for one goal. Ephemeral — recomputed on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    /// The goal this progress was computed for
    pub goal_id: String,
    /// Progress toward the target, clamped to [0, 100]
    pub progress_percentage: f64,
    /// Raw current value in the goal's unit (meters, seconds, or runs)
    pub current_value: f64,
    /// The goal's target value, echoed for the presentation layer
    pub target_value: f64,
    /// Progress implied by a linear schedule at this point in time
    pub expected_progress: f64,
    /// Whether progress meets 90% of the linear schedule (or is complete)
    pub is_on_track: bool,
    /// Projected completion timestamp under the current rate
    pub projected_completion: DateTime<Utc>,
    /// Days until the target date (negative once past it)
    pub days_remaining: i64,
    /// Natural-language observations about the current state
    pub insights: Vec<String>,
    /// Natural-language coaching suggestions
    pub recommendations: Vec<String>,
}

/// Advisory validation result for a goal definition.
///
/// Callers decide whether to block goal creation on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalValidation {
    /// True when no problems were found
    pub is_valid: bool,
    /// Human-readable descriptions of each problem
    pub errors: Vec<String>,
}

/// Calculate progress for a goal against the full record history.
///
/// Records are quality-filtered and constrained to the goal's window before
/// anything is summed. Deterministic given `(goal, records, now)`. Pace goals
/// match efforts using the default tolerance band
/// ([`PACE_DISTANCE_TOLERANCE`](crate::constants::goal_progress::PACE_DISTANCE_TOLERANCE)).
///
/// # Errors
///
/// Returns [`IntelligenceError::InvalidGoal`] when the goal's target date is
/// not after its creation date. That is a broken definition, not a data
/// issue, and is never worth retrying unchanged.
pub fn calculate_progress(
    goal: &Goal,
    records: &[ActivityRecord],
    now: DateTime<Utc>,
) -> Result<GoalProgress> {
    calculate_progress_with_tolerance(goal, records, now, PACE_DISTANCE_TOLERANCE)
}

/// Calculate progress with a caller-chosen pace-distance tolerance band.
///
/// `pace_distance_tolerance` is the fraction of a pace goal's race distance
/// within which an effort counts as a comparable attempt. Ignored for
/// distance-total and run-count goals.
///
/// # Errors
///
/// Returns [`IntelligenceError::InvalidInput`] when the tolerance is negative
/// or not finite, and [`IntelligenceError::InvalidGoal`] when the goal's
/// target date is not after its creation date.
pub fn calculate_progress_with_tolerance(
    goal: &Goal,
    records: &[ActivityRecord],
    now: DateTime<Utc>,
    pace_distance_tolerance: f64,
) -> Result<GoalProgress> {
    if !pace_distance_tolerance.is_finite() || pace_distance_tolerance < 0.0 {
        return Err(IntelligenceError::invalid_input(format!(
            "pace distance tolerance must be a non-negative fraction, got {pace_distance_tolerance}"
        )));
    }

    if goal.target_date <= goal.created_at {
        return Err(IntelligenceError::invalid_goal(format!(
            "target date {} is not after creation date {}",
            goal.target_date, goal.created_at
        )));
    }

    let total_days = (goal.target_date - goal.created_at).num_days();
    let days_remaining = (goal.target_date - now).num_days();
    let days_elapsed = (total_days - days_remaining).max(0);

    let current_value = current_value_for(goal, records, pace_distance_tolerance);
    let progress_percentage = progress_percentage_for(goal, current_value);

    #[allow(clippy::cast_precision_loss)]
    let expected_progress = if total_days > 0 {
        days_elapsed as f64 / total_days as f64 * 100.0
    } else {
        100.0
    };

    // Already-met overrides the schedule comparison.
    let is_on_track =
        progress_percentage >= ON_TRACK_RATIO * expected_progress || progress_percentage >= 100.0;

    let projected_completion = project_completion(
        goal,
        progress_percentage,
        days_elapsed,
        total_days,
        now,
    );

    let insights = progress_insights(progress_percentage, expected_progress, is_on_track);
    let recommendations = progress_recommendations(
        goal,
        current_value,
        progress_percentage,
        days_remaining,
    );

    debug!(
        goal_id = %goal.id,
        progress = progress_percentage,
        expected = expected_progress,
        on_track = is_on_track,
        "goal progress computed"
    );

    Ok(GoalProgress {
        goal_id: goal.id.clone(),
        progress_percentage,
        current_value,
        target_value: goal.target_value,
        expected_progress,
        is_on_track,
        projected_completion,
        days_remaining,
        insights,
        recommendations,
    })
}

/// Advisory sanity checks on a goal definition.
#[must_use]
pub fn validate_goal(goal: &Goal, now: DateTime<Utc>) -> GoalValidation {
    let mut errors = Vec::new();

    if goal.target_value <= 0.0 {
        errors.push("Target value must be positive".to_owned());
    }

    if goal.target_date <= goal.created_at {
        errors.push("Target date must be after the creation date".to_owned());
    }

    if goal.target_date <= now {
        errors.push("Target date must be in the future".to_owned());
    }

    match goal.goal_type {
        GoalType::PaceForRaceDistance {
            race_distance_meters,
        } => {
            if race_distance_meters <= 0.0 {
                errors.push("Pace goal must specify a positive race distance".to_owned());
            }
        }
        GoalType::DistanceTotal => {
            if goal.target_value > MAX_DISTANCE_TARGET_METERS {
                errors.push(format!(
                    "Distance target of {:.0} km exceeds the plausible range",
                    goal.target_value / 1000.0
                ));
            }
        }
        GoalType::RunCount => {
            if goal.target_value > MAX_RUN_COUNT_TARGET {
                errors.push(format!(
                    "Run count target of {:.0} exceeds the plausible range",
                    goal.target_value
                ));
            }
        }
    }

    GoalValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Current raw value toward the goal, per goal kind.
fn current_value_for(goal: &Goal, records: &[ActivityRecord], pace_distance_tolerance: f64) -> f64 {
    match goal.goal_type {
        GoalType::DistanceTotal => {
            filter_by_timeframe(records, goal.created_at, goal.target_date)
                .iter()
                .map(ActivityRecord::distance_meters)
                .sum()
        }
        GoalType::RunCount => {
            let count = filter_by_timeframe(records, goal.created_at, goal.target_date).len();
            #[allow(clippy::cast_precision_loss)]
            let count = count as f64;
            count
        }
        GoalType::PaceForRaceDistance {
            race_distance_meters,
        } => {
            let best = filter_for_pace_goal(records, race_distance_meters, pace_distance_tolerance)
                .iter()
                .map(|r| r.moving_time_seconds())
                .min();
            #[allow(clippy::cast_precision_loss)]
            let best_seconds = best.map_or(0.0, |seconds| seconds as f64);
            best_seconds
        }
    }
}

/// Progress percentage in [0, 100], per goal kind.
///
/// Pace goals are binary-achieved: partial credit on a race time is not
/// meaningful, so anything short of the target time is 0%.
fn progress_percentage_for(goal: &Goal, current_value: f64) -> f64 {
    match goal.goal_type {
        GoalType::DistanceTotal | GoalType::RunCount => {
            if goal.target_value > 0.0 {
                (current_value / goal.target_value * 100.0).min(100.0)
            } else {
                0.0
            }
        }
        GoalType::PaceForRaceDistance { .. } => {
            if current_value > 0.0 && current_value <= goal.target_value {
                100.0
            } else {
                0.0
            }
        }
    }
}

/// Linear completion projection, capped to avoid runaway extrapolation.
fn project_completion(
    goal: &Goal,
    progress_percentage: f64,
    days_elapsed: i64,
    total_days: i64,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    if progress_percentage >= 100.0 {
        return now;
    }
    if progress_percentage <= 0.0 || days_elapsed == 0 {
        // No rate to extrapolate from yet.
        return goal.target_date;
    }

    #[allow(clippy::cast_precision_loss)]
    let projected_days = days_elapsed as f64 * 100.0 / progress_percentage;
    #[allow(clippy::cast_precision_loss)]
    let capped_days = projected_days.min(total_days as f64 * MAX_PROJECTION_MULTIPLIER);
    #[allow(clippy::cast_possible_truncation)]
    let capped_days = capped_days.round() as i64;

    goal.created_at + Duration::days(capped_days)
}

fn progress_insights(
    progress_percentage: f64,
    expected_progress: f64,
    is_on_track: bool,
) -> Vec<String> {
    let mut insights = Vec::new();

    if progress_percentage >= 100.0 {
        insights.push("Goal achieved! Consider setting a new challenge.".to_owned());
    } else if is_on_track {
        insights.push(format!(
            "On track: {progress_percentage:.0}% complete against {expected_progress:.0}% expected at this point"
        ));
    } else {
        let gap = expected_progress - progress_percentage;
        insights.push(format!(
            "Behind schedule by {gap:.0} percentage points ({progress_percentage:.0}% complete, {expected_progress:.0}% expected)"
        ));
    }

    insights
}

fn progress_recommendations(
    goal: &Goal,
    current_value: f64,
    progress_percentage: f64,
    days_remaining: i64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if progress_percentage < 100.0 {
        match goal.goal_type {
            GoalType::DistanceTotal => {
                let remaining_km = (goal.target_value - current_value).max(0.0) / 1000.0;
                let days = days_remaining.max(1);
                #[allow(clippy::cast_precision_loss)]
                let per_day = remaining_km / days as f64;
                recommendations.push(format!(
                    "Cover {per_day:.1} km per day ({remaining_km:.0} km over {days} days) to reach your target"
                ));
            }
            GoalType::RunCount => {
                let remaining_runs = (goal.target_value - current_value).max(0.0);
                #[allow(clippy::cast_precision_loss)]
                let weeks = (days_remaining.max(1) as f64 / 7.0).max(1.0);
                let per_week = (remaining_runs / weeks).ceil();
                recommendations.push(format!(
                    "Schedule {per_week:.0} runs per week to hit {remaining_runs:.0} more runs in time"
                ));
            }
            GoalType::PaceForRaceDistance { .. } => {
                recommendations.push(
                    "Add one interval session per week (e.g. 6x800m at target pace) to build speed"
                        .to_owned(),
                );
                recommendations.push(
                    "Include a weekly tempo run slightly slower than race pace to raise your threshold"
                        .to_owned(),
                );
            }
        }
    } else {
        recommendations.push("Target met - maintain your current routine".to_owned());
    }

    if days_remaining < RESCOPE_DAYS_REMAINING && progress_percentage < RESCOPE_PROGRESS_PERCENT {
        recommendations.push(format!(
            "Less than {RESCOPE_DAYS_REMAINING} days remain with under {RESCOPE_PROGRESS_PERCENT:.0}% progress - consider re-scoping the goal to keep it motivating"
        ));
    }

    recommendations
}

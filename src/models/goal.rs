// ABOUTME: Goal model for user-defined training targets with deadlines
// ABOUTME: Created and edited by the presentation layer; the core only reads it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-defined training target with a deadline.
///
/// The analytics core never mutates or persists goals; progress is
/// recomputed from scratch on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier, assigned by the presentation layer
    pub id: String,
    /// Human-readable title
    pub title: String,
    /// What kind of target this is, with type-specific payload
    #[serde(flatten)]
    pub goal_type: GoalType,
    /// Target value in the goal's unit
    pub target_value: f64,
    /// Unit of the target value
    pub unit: GoalUnit,
    /// Deadline for reaching the target
    pub target_date: DateTime<Utc>,
    /// When the goal was created; progress is measured from here
    pub created_at: DateTime<Utc>,
    /// Relative importance to the user
    pub priority: GoalPriority,
    /// Lifecycle state
    pub status: GoalStatus,
}

/// The closed set of goal kinds.
///
/// One tagged variant per kind keeps dispatch exhaustive; adding a kind is a
/// compile-visible change everywhere progress is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GoalType {
    /// Accumulate a total distance before the deadline
    DistanceTotal,
    /// Run a given race distance at or under a target time
    PaceForRaceDistance {
        /// The race distance this time target applies to (meters)
        race_distance_meters: f64,
    },
    /// Complete a number of runs before the deadline
    RunCount,
}

/// Unit of a goal's target value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalUnit {
    /// Distance in meters
    Meters,
    /// Duration in seconds
    Seconds,
    /// Count of completed runs
    Runs,
}

/// Relative importance of a goal to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPriority {
    /// Nice to have
    Low,
    /// Standard goal
    Medium,
    /// The user's main focus
    High,
}

/// Lifecycle state of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Being actively pursued
    Active,
    /// Target reached
    Completed,
    /// Given up before the deadline
    Abandoned,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn goal_type_serializes_with_kebab_case_tag() {
        let goal = Goal {
            id: "g1".into(),
            title: "Sub-25 5k".into(),
            goal_type: GoalType::PaceForRaceDistance {
                race_distance_meters: 5000.0,
            },
            target_value: 1500.0,
            unit: GoalUnit::Seconds,
            target_date: Utc::now() + Duration::days(60),
            created_at: Utc::now(),
            priority: GoalPriority::High,
            status: GoalStatus::Active,
        };

        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["type"], "pace-for-race-distance");
        assert_eq!(json["race_distance_meters"], 5000.0);
    }
}

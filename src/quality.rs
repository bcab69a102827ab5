// ABOUTME: Quality filter rejecting sensor/GPS-error records before analysis
// ABOUTME: Every downstream computation assumes this filter has already run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

//! Sanity-check predicates removing GPS/sensor-error records.
//!
//! Device-derived activity data routinely contains GPS dropout artifacts
//! (impossible paces and distances). Filtering is a mandatory first stage:
//! a record failing any single predicate is excluded entirely from both
//! goal progress and insight generation.

use crate::constants::quality::{
    MAX_DISTANCE_METERS, MAX_PACE_SECONDS_PER_KM, MAX_SPEED_KMH, MIN_DISTANCE_METERS,
    MIN_PACE_SECONDS_PER_KM,
};
use crate::models::ActivityRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Why a record was rejected by the quality filter.
///
/// A record failing several predicates is attributed to the first failing
/// one, in the order of the variants below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Distance outside [500 m, 200 km]
    DistanceOutlier,
    /// Moving time of zero
    TimeOutlier,
    /// Pace outside [150, 720] s/km
    PaceOutlier,
    /// Implied speed above 25 km/h. The 150 s/km pace floor (24 km/h) fires
    /// first under the attribution order, so this count stays at zero unless
    /// the pace bounds change.
    SpeedOutlier,
    /// Elevation gain exceeding the distance (GPS artifact)
    ElevationOutlier,
}

/// Diagnostic counts from a quality-filter pass.
///
/// Observability only — never used for decisions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterStats {
    /// Records examined
    pub total: usize,
    /// Records passing every predicate
    pub valid: usize,
    /// Rejections attributed to distance bounds
    pub distance_outliers: usize,
    /// Rejections attributed to zero moving time
    pub time_outliers: usize,
    /// Rejections attributed to pace bounds
    pub pace_outliers: usize,
    /// Rejections attributed to the speed ceiling
    pub speed_outliers: usize,
    /// Rejections attributed to implausible elevation gain
    pub elevation_outliers: usize,
}

/// Evaluate the quality predicates for one record.
///
/// Returns `None` when the record is valid, otherwise the first failing
/// predicate.
#[must_use]
pub fn rejection_reason(record: &ActivityRecord) -> Option<RejectionReason> {
    let distance = record.distance_meters();
    if !(MIN_DISTANCE_METERS..=MAX_DISTANCE_METERS).contains(&distance) {
        return Some(RejectionReason::DistanceOutlier);
    }

    if record.moving_time_seconds() == 0 {
        return Some(RejectionReason::TimeOutlier);
    }

    // Distance and moving time are both positive here, so pace and speed exist.
    let pace = record.pace_seconds_per_km().unwrap_or(f64::INFINITY);
    if !(MIN_PACE_SECONDS_PER_KM..=MAX_PACE_SECONDS_PER_KM).contains(&pace) {
        return Some(RejectionReason::PaceOutlier);
    }

    let speed = record.speed_kmh().unwrap_or(f64::INFINITY);
    if speed > MAX_SPEED_KMH {
        return Some(RejectionReason::SpeedOutlier);
    }

    if let Some(elevation) = record.elevation_gain() {
        if elevation > distance {
            return Some(RejectionReason::ElevationOutlier);
        }
    }

    None
}

/// Keep only records passing every quality predicate.
#[must_use]
pub fn filter_valid_records(records: &[ActivityRecord]) -> Vec<ActivityRecord> {
    records
        .iter()
        .filter(|r| rejection_reason(r).is_none())
        .cloned()
        .collect()
}

/// Quality-filter, then keep records within ±`tolerance` of `target_distance_meters`.
///
/// A pace/race goal is only meaningful against comparable-distance efforts.
#[must_use]
pub fn filter_for_pace_goal(
    records: &[ActivityRecord],
    target_distance_meters: f64,
    tolerance: f64,
) -> Vec<ActivityRecord> {
    let band = target_distance_meters * tolerance;
    records
        .iter()
        .filter(|r| rejection_reason(r).is_none())
        .filter(|r| (r.distance_meters() - target_distance_meters).abs() <= band)
        .cloned()
        .collect()
}

/// Quality-filter, then keep records whose start falls in `[start, end]`.
#[must_use]
pub fn filter_by_timeframe(
    records: &[ActivityRecord],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<ActivityRecord> {
    records
        .iter()
        .filter(|r| rejection_reason(r).is_none())
        .filter(|r| r.start_date() >= start && r.start_date() <= end)
        .cloned()
        .collect()
}

/// Count records per rejection reason for diagnostics.
#[must_use]
pub fn filter_stats(records: &[ActivityRecord]) -> FilterStats {
    let mut stats = FilterStats {
        total: records.len(),
        ..FilterStats::default()
    };

    for record in records {
        match rejection_reason(record) {
            None => stats.valid += 1,
            Some(RejectionReason::DistanceOutlier) => stats.distance_outliers += 1,
            Some(RejectionReason::TimeOutlier) => stats.time_outliers += 1,
            Some(RejectionReason::PaceOutlier) => stats.pace_outliers += 1,
            Some(RejectionReason::SpeedOutlier) => stats.speed_outliers += 1,
            Some(RejectionReason::ElevationOutlier) => stats.elevation_outliers += 1,
        }
    }

    debug!(
        total = stats.total,
        valid = stats.valid,
        rejected = stats.total - stats.valid,
        "quality filter pass complete"
    );

    stats
}

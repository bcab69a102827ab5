// ABOUTME: Analysis thresholds and bands for the running analytics core
// ABOUTME: Heuristics tailored to recreational running, organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

//! Analysis thresholds used throughout the analytics core.
//!
//! These values encode heuristics for recreational running. Several of them
//! (on-track tolerance, milestone bands) are candidates for being derived
//! from the athlete's own historical variance instead of fixed constants;
//! until then they live here with their rationale.

/// Quality filter bounds for rejecting sensor/GPS-error records
pub mod quality {
    /// Shortest distance considered a real run rather than a GPS stub (meters)
    pub const MIN_DISTANCE_METERS: f64 = 500.0;

    /// Longest plausible single-session distance for a recreational runner (meters)
    pub const MAX_DISTANCE_METERS: f64 = 200_000.0;

    /// Fastest plausible sustained pace, roughly 2:30 min/km (seconds per km)
    pub const MIN_PACE_SECONDS_PER_KM: f64 = 150.0;

    /// Slowest pace still counted as running rather than a paused watch, 12:00 min/km (seconds per km)
    pub const MAX_PACE_SECONDS_PER_KM: f64 = 720.0;

    /// Speed ceiling; anything faster is a vehicle or GPS jump (km/h)
    pub const MAX_SPEED_KMH: f64 = 25.0;
}

/// Goal progress thresholds
pub mod goal_progress {
    /// Fraction of the linear-schedule expectation that still counts as on track.
    /// Tunable: could be derived from the athlete's historical variance.
    pub const ON_TRACK_RATIO: f64 = 0.9;

    /// Days remaining below which a badly lagging goal gets a re-scope suggestion
    pub const RESCOPE_DAYS_REMAINING: i64 = 30;

    /// Progress percentage below which the re-scope suggestion applies
    pub const RESCOPE_PROGRESS_PERCENT: f64 = 80.0;

    /// Cap on linear extrapolation of completion, as a multiple of the
    /// planned duration. Keeps early noisy rates from projecting years out.
    pub const MAX_PROJECTION_MULTIPLIER: f64 = 2.0;

    /// Sanity ceiling for distance-total goal targets (meters, 10,000 km)
    pub const MAX_DISTANCE_TARGET_METERS: f64 = 10_000_000.0;

    /// Sanity ceiling for run-count goal targets
    pub const MAX_RUN_COUNT_TARGET: f64 = 1_000.0;

    /// Default band around a race distance within which an effort counts as
    /// a comparable attempt (fraction of the race distance)
    pub const PACE_DISTANCE_TOLERANCE: f64 = 0.10;
}

/// Trigger thresholds for the insight detector battery
pub mod detectors {
    /// Window of most recent runs compared against the remainder for pace trends
    pub const PACE_TREND_WINDOW: usize = 10;

    /// Minimum records in the comparison remainder for a pace trend
    pub const PACE_TREND_MIN_BASELINE: usize = 3;

    /// Smallest pace change worth reporting (percent).
    /// Reference: Hopkins, W.G. (2004). How to interpret changes in an
    /// athletic performance test — smallest worthwhile change.
    pub const PACE_TREND_THRESHOLD_PERCENT: f64 = 3.0;

    /// Window of most recent runs for distance progression comparison
    pub const DISTANCE_TREND_WINDOW: usize = 5;

    /// Smallest distance change worth reporting (percent)
    pub const DISTANCE_TREND_THRESHOLD_PERCENT: f64 = 10.0;

    /// Weekly volume growth beyond this is flagged as injury risk (percent).
    /// Reference: Gabbett, T.J. (2016). The training-injury prevention paradox.
    pub const UNSAFE_WEEKLY_GROWTH_PERCENT: f64 = 10.0;

    /// Minimum records before frequency bucketing is meaningful
    pub const FREQUENCY_MIN_RECORDS: usize = 7;

    /// Trailing window for run-frequency analysis (days)
    pub const FREQUENCY_WINDOW_DAYS: i64 = 30;

    /// Cool-weather bucket upper bound (Celsius)
    pub const COOL_TEMPERATURE_CELSIUS: f32 = 15.0;

    /// Warm-weather bucket lower bound (Celsius)
    pub const WARM_TEMPERATURE_CELSIUS: f32 = 20.0;

    /// Minimum records per temperature bucket
    pub const WEATHER_MIN_BUCKET_SIZE: usize = 3;

    /// Share of records on a single weekday that marks a schedule pattern
    pub const WEEKDAY_PATTERN_SHARE: f64 = 0.25;

    /// Distance coefficient of variation below which training lacks variety
    pub const VARIETY_CV_THRESHOLD: f64 = 0.3;

    /// Share of consecutive-day gaps that marks insufficient recovery
    pub const RECOVERY_BACK_TO_BACK_SHARE: f64 = 0.30;

    /// Mean heart rate as a fraction of estimated max that marks high load
    pub const HIGH_HR_LOAD_FRACTION: f64 = 0.80;

    /// Assumed athlete age for max-HR estimation when none is known.
    /// Max HR via the Fox formula (220 - age); reference: Tanaka, H.,
    /// Monahan, K.D., & Seals, D.R. (2001). Age-predicted maximal heart
    /// rate revisited.
    pub const ASSUMED_ATHLETE_AGE: u32 = 35;

    /// Days within which a best-ever pace counts as a recent personal record
    pub const RECENT_PR_WINDOW_DAYS: i64 = 30;
}

/// Milestone bands for cumulative achievements.
/// Fixed for now; per-athlete derivation is an open question.
pub mod milestones {
    /// Cumulative distance bands (kilometers)
    pub const DISTANCE_BANDS_KM: [f64; 5] = [100.0, 250.0, 500.0, 1000.0, 2000.0];

    /// Cumulative run-count bands
    pub const RUN_COUNT_BANDS: [usize; 5] = [10, 25, 50, 100, 200];
}

/// Weights and component values for insight prioritization
pub mod scoring {
    /// Weight of the impact component
    pub const IMPACT_WEIGHT: f64 = 0.35;

    /// Weight of the confidence component
    pub const CONFIDENCE_WEIGHT: f64 = 0.25;

    /// Weight of the actionability component
    pub const ACTIONABILITY_WEIGHT: f64 = 0.30;

    /// Weight of the urgency component
    pub const URGENCY_WEIGHT: f64 = 0.10;

    /// Impact bonus for performance and health categories
    pub const CATEGORY_IMPACT_BONUS: f64 = 0.1;

    /// Sample size at which the confidence adjustment stops rewarding more data
    pub const CONFIDENCE_FULL_SAMPLE: usize = 10;
}

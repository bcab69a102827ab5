// ABOUTME: Integration tests for the quality filter and its derived views
// ABOUTME: Covers predicate exclusion, pace-goal banding, and diagnostic stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use stride_intelligence::{
    filter_by_timeframe, filter_stats, filter_valid_records, ActivityRecord,
    ActivityRecordBuilder,
};

fn run(id: &str, day: i64, distance_m: f64, moving_s: u64) -> ActivityRecord {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 7, 0, 0).unwrap();
    ActivityRecordBuilder::new(id, start + Duration::days(day), distance_m, moving_s).build()
}

#[test]
fn single_failing_predicate_excludes_the_record() {
    let records = vec![
        run("valid", 0, 8000.0, 2880),
        run("short", 1, 300.0, 150),      // distance below 500 m
        run("no_time", 2, 5000.0, 0),     // zero moving time
        run("rocket", 3, 5000.0, 600),    // 120 s/km, impossibly fast
        run("crawl", 4, 5000.0, 4200),    // 840 s/km, beyond walking
    ];

    let valid = filter_valid_records(&records);
    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].id(), "valid");
}

#[test]
fn gps_stub_is_absent_from_every_view_and_the_valid_count() {
    // A 300 m GPS stub must contribute to nothing.
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let end = start + Duration::days(30);
    let records = vec![run("real", 5, 5000.0, 1800), run("stub", 6, 300.0, 120)];

    let valid = filter_valid_records(&records);
    assert!(valid.iter().all(|r| r.id() != "stub"));

    let windowed = filter_by_timeframe(&records, start, end);
    assert!(windowed.iter().all(|r| r.id() != "stub"));

    let stats = filter_stats(&records);
    assert_eq!(stats.valid, 1);
    assert_eq!(stats.distance_outliers, 1);
}

#[test]
fn elevation_artifact_is_rejected() {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 7, 0, 0).unwrap();
    let record = ActivityRecordBuilder::new("hill", start, 2000.0, 900)
        .elevation_gain(2500.0)
        .build();

    assert!(filter_valid_records(&[record]).is_empty());
}

#[test]
fn timeframe_view_respects_both_bounds() {
    let start = Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 1, 20, 0, 0, 0).unwrap();
    let records = vec![
        run("before", 5, 5000.0, 1800),
        run("inside", 12, 5000.0, 1800),
        run("after", 25, 5000.0, 1800),
    ];

    let windowed = filter_by_timeframe(&records, start, end);
    assert_eq!(windowed.len(), 1);
    assert_eq!(windowed[0].id(), "inside");
}

#[test]
fn stats_reasons_sum_to_total() {
    let records = vec![
        run("a", 0, 8000.0, 2880),
        run("b", 1, 300.0, 150),
        run("c", 2, 5000.0, 0),
        run("d", 3, 5000.0, 600),
        run("e", 4, 250_000.0, 90_000),
    ];

    let stats = filter_stats(&records);
    assert_eq!(stats.total, 5);
    let accounted = stats.valid
        + stats.distance_outliers
        + stats.time_outliers
        + stats.pace_outliers
        + stats.speed_outliers
        + stats.elevation_outliers;
    assert_eq!(accounted, stats.total);
}

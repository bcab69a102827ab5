// ABOUTME: Integration tests for end-to-end insight generation
// ABOUTME: Covers sparse histories, pace trends, output bounds, and filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use stride_intelligence::{
    filter_insights, ActivityRecord, ActivityRecordBuilder, InsightCategory, InsightEngine,
    InsightEngineConfig, InsightFilter, InsightPriority,
};

fn run(id: &str, day: i64, distance_m: f64, moving_s: u64) -> ActivityRecord {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 7, 0, 0).unwrap();
    ActivityRecordBuilder::new(id, start + Duration::days(day), distance_m, moving_s).build()
}

/// 15 runs where the last 10 are 5% faster than the first 5.
fn improving_history() -> Vec<ActivityRecord> {
    let mut records = Vec::new();
    for i in 0..5i64 {
        records.push(run(&format!("base{i}"), i * 2, 5000.0, 1800));
    }
    for i in 0..10i64 {
        records.push(run(&format!("fast{i}"), 10 + i * 2, 5000.0, 1710));
    }
    records
}

#[test]
fn two_records_is_not_enough_data() {
    let engine = InsightEngine::new();
    let records = vec![run("a", 0, 5000.0, 1800), run("b", 2, 5000.0, 1750)];
    assert!(engine.generate_insights(&records).is_empty());
}

#[test]
fn faster_recent_runs_surface_an_improving_pace_trend() {
    let engine = InsightEngine::new();
    let insights = engine.generate_insights(&improving_history());

    let trend = insights
        .iter()
        .find(|i| i.metrics.get("direction").is_some())
        .expect("pace trend insight");
    assert_eq!(trend.category, InsightCategory::Performance);
    assert_eq!(trend.metrics["direction"], "improving");
    assert!(trend.confidence >= 0.6);
    assert!(trend.finding.contains("faster"));
}

#[test]
fn generation_is_deterministic() {
    let engine = InsightEngine::new();
    let records = improving_history();

    let first: Vec<_> = engine
        .generate_insights(&records)
        .into_iter()
        .map(|i| (i.id, i.finding))
        .collect();
    let second: Vec<_> = engine
        .generate_insights(&records)
        .into_iter()
        .map(|i| (i.id, i.finding))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn output_is_ranked_and_bounded() {
    let config = InsightEngineConfig::default();
    let engine = InsightEngine::new();
    let insights = engine.generate_insights(&improving_history());

    assert!(!insights.is_empty());
    assert!(insights.len() <= config.max_insights);
    for insight in &insights {
        assert!(insight.confidence >= config.min_confidence);
        assert!(insight.sample_size >= config.min_sample_size);
    }
}

#[test]
fn tight_confidence_floor_thins_the_list() {
    let permissive = InsightEngine::new();
    let strict = InsightEngine::with_config(InsightEngineConfig {
        min_confidence: 0.9,
        ..InsightEngineConfig::default()
    });
    let records = improving_history();

    let loose = permissive.generate_insights(&records);
    let tight = strict.generate_insights(&records);
    assert!(tight.len() <= loose.len());
    assert!(tight.iter().all(|i| i.confidence >= 0.9));
}

#[test]
fn invalid_records_never_reach_the_detectors() {
    let engine = InsightEngine::new();
    let mut records = improving_history();
    // GPS stubs and teleports must not perturb the analysis.
    records.push(run("stub", 31, 200.0, 60));
    records.push(run("teleport", 32, 20_000.0, 900));

    let clean = engine.generate_insights(&improving_history());
    let noisy = engine.generate_insights(&records);

    let clean_ids: Vec<_> = clean.iter().map(|i| i.id).collect();
    let noisy_ids: Vec<_> = noisy.iter().map(|i| i.id).collect();
    assert_eq!(clean_ids, noisy_ids);
}

#[test]
fn actionable_only_filter_drops_celebrations() {
    let engine = InsightEngine::new();
    let insights = engine.generate_insights(&improving_history());
    let filtered = filter_insights(
        &insights,
        &InsightFilter {
            actionable_only: true,
            ..InsightFilter::default()
        },
    );
    assert!(filtered.iter().all(|i| i.actionable));
}

#[test]
fn priority_filter_is_a_pure_view() {
    let engine = InsightEngine::new();
    let insights = engine.generate_insights(&improving_history());
    let filtered = filter_insights(
        &insights,
        &InsightFilter {
            priority: Some(InsightPriority::High),
            ..InsightFilter::default()
        },
    );

    assert!(filtered.iter().all(|i| i.priority == InsightPriority::High));
    // Original list is untouched.
    assert!(filtered.len() <= insights.len());
}

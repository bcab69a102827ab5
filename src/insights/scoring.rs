// ABOUTME: Multi-factor prioritization scoring for candidate insights
// ABOUTME: Weighs impact, adjusted confidence, actionability, and urgency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

use super::{DataQuality, Difficulty, Insight, InsightCategory, InsightPriority, InsightTimeframe};
use crate::constants::scoring::{
    ACTIONABILITY_WEIGHT, CATEGORY_IMPACT_BONUS, CONFIDENCE_FULL_SAMPLE, CONFIDENCE_WEIGHT,
    IMPACT_WEIGHT, URGENCY_WEIGHT,
};

/// Total prioritization score for a candidate insight.
///
/// Weighted sum of four components, each in [0, 1]: impact, confidence
/// (adjusted for sample size and data quality), actionability, and urgency.
#[must_use]
pub fn priority_score(insight: &Insight) -> f64 {
    IMPACT_WEIGHT * impact(insight)
        + CONFIDENCE_WEIGHT * adjusted_confidence(insight)
        + ACTIONABILITY_WEIGHT * actionability(insight)
        + URGENCY_WEIGHT * urgency(insight)
}

/// Impact from priority level, with a bonus for performance and health
/// findings since those move the needle most for recreational runners.
fn impact(insight: &Insight) -> f64 {
    let base = match insight.priority {
        InsightPriority::High => 1.0,
        InsightPriority::Medium => 0.6,
        InsightPriority::Low => 0.3,
    };

    let bonus = match insight.category {
        InsightCategory::Performance | InsightCategory::Health => CATEGORY_IMPACT_BONUS,
        InsightCategory::Consistency | InsightCategory::Training | InsightCategory::Achievement => {
            0.0
        }
    };

    (base + bonus).min(1.0)
}

/// Detector's self-reported confidence, discounted for thin samples and
/// weaker data-quality labels.
fn adjusted_confidence(insight: &Insight) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let sample_ratio = (insight.sample_size as f64 / CONFIDENCE_FULL_SAMPLE as f64).min(1.0);
    let sample_factor = 0.2f64.mul_add(sample_ratio, 0.8);

    let quality_factor = match insight.data_quality {
        DataQuality::High => 1.0,
        DataQuality::Medium => 0.85,
        DataQuality::Low => 0.7,
    };

    insight.confidence * sample_factor * quality_factor
}

/// Reward insights the athlete can actually do something about, soon.
fn actionability(insight: &Insight) -> f64 {
    let base = if insight.actionable { 0.5 } else { 0.1 };

    let difficulty = match insight.difficulty {
        Difficulty::Easy => 0.25,
        Difficulty::Moderate => 0.15,
        Difficulty::Hard => 0.05,
    };

    let timeframe = match insight.timeframe {
        InsightTimeframe::Immediate => 0.25,
        InsightTimeframe::ShortTerm => 0.15,
        InsightTimeframe::LongTerm => 0.05,
    };

    base + difficulty + timeframe
}

/// Urgency is highest for high-priority health findings, moderate for
/// declining performance, lowest for celebrations.
fn urgency(insight: &Insight) -> f64 {
    match (insight.category, insight.priority) {
        (InsightCategory::Health, InsightPriority::High) => 1.0,
        (InsightCategory::Health, _) => 0.7,
        (InsightCategory::Performance, InsightPriority::High) => 0.6,
        (InsightCategory::Achievement, _) => 0.1,
        _ => 0.3,
    }
}

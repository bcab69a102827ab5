// ABOUTME: Insight engine running a detector battery over filtered records
// ABOUTME: Scores, ranks, and bounds the findings before they reach the UI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

//! Insight generation for recent training.
//!
//! A fixed battery of independent, pure detectors runs over the
//! chronologically sorted, quality-filtered record set. Each detector
//! returns at most one candidate insight; candidates below the configured
//! confidence or sample-size floors are dropped, survivors are scored on
//! impact, confidence, actionability, and urgency, then the list is
//! truncated to the configured maximum.

use crate::config::InsightEngineConfig;
use crate::models::ActivityRecord;
use crate::quality::filter_valid_records;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace};
use uuid::Uuid;

/// The pattern detectors themselves
pub mod detectors;

/// Multi-factor prioritization scoring
pub mod scoring;

/// Category of a training insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    /// Pace and race-readiness findings
    Performance,
    /// Schedule and habit findings
    Consistency,
    /// Load, recovery, and injury-risk findings
    Health,
    /// Training structure and variety findings
    Training,
    /// Personal records and milestones
    Achievement,
}

/// Priority level of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightPriority {
    /// Informational
    Low,
    /// Worth attention
    Medium,
    /// Act on this
    High,
}

/// Label for how trustworthy the underlying sample is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataQuality {
    /// Thin sample; treat as a hint
    Low,
    /// Reasonable sample
    Medium,
    /// Large, consistent sample
    High,
}

/// How hard the recommended action is to adopt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// One small change
    Easy,
    /// A structural change to the week
    Moderate,
    /// A sustained commitment
    Hard,
}

/// When the recommended action should happen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightTimeframe {
    /// This week
    Immediate,
    /// The next few weeks
    ShortTerm,
    /// A season or longer
    LongTerm,
}

/// A discrete, scored, human-readable statistical finding about recent
/// training. Ephemeral — regenerated on every call, with no identity
/// beyond the invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    /// Stable per-detector identifier (deterministic across calls), usable
    /// as the key of an external dismissal store
    pub id: Uuid,
    /// What area of training this concerns
    pub category: InsightCategory,
    /// How important it is
    pub priority: InsightPriority,
    /// The fact that was observed
    pub finding: String,
    /// What the fact means for the athlete
    pub interpretation: String,
    /// What to do about it
    pub recommendation: String,
    /// Self-reported reliability in [0, 1]
    pub confidence: f64,
    /// Number of records the finding is based on
    pub sample_size: usize,
    /// Quality label for the underlying sample
    pub data_quality: DataQuality,
    /// Whether the athlete can act on this directly
    pub actionable: bool,
    /// Effort required by the recommendation
    pub difficulty: Difficulty,
    /// Horizon of the recommendation
    pub timeframe: InsightTimeframe,
    /// Raw supporting numbers for the presentation layer
    pub metrics: serde_json::Value,
}

/// Post-hoc filter criteria for an insight list.
///
/// A read-only view — filtering never re-ranks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightFilter {
    /// Keep only this category
    pub category: Option<InsightCategory>,
    /// Keep only this priority
    pub priority: Option<InsightPriority>,
    /// Keep only insights at or above this confidence
    pub min_confidence: Option<f64>,
    /// Keep only actionable insights
    pub actionable_only: bool,
    /// Keep only this timeframe
    pub timeframe: Option<InsightTimeframe>,
    /// Keep only this difficulty
    pub difficulty: Option<Difficulty>,
}

/// The insight engine: detector battery plus scoring and ranking.
pub struct InsightEngine {
    config: InsightEngineConfig,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: InsightEngineConfig::default(),
        }
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub const fn with_config(config: InsightEngineConfig) -> Self {
        Self { config }
    }

    /// Generate a ranked, size-bounded insight list for the record history.
    ///
    /// Returns an empty list when fewer than `min_sample_size` records
    /// survive the quality filter — not enough data is not an error.
    #[must_use]
    pub fn generate_insights(&self, records: &[ActivityRecord]) -> Vec<Insight> {
        let mut valid = filter_valid_records(records);
        if valid.len() < self.config.min_sample_size {
            debug!(
                valid = valid.len(),
                min = self.config.min_sample_size,
                "insufficient data for insight generation"
            );
            return Vec::new();
        }

        valid.sort_by_key(ActivityRecord::start_date);

        let mut candidates = Vec::new();
        for detector in detectors::BATTERY {
            if let Some(insight) = detector(&valid) {
                trace!(id = %insight.id, category = ?insight.category, "detector fired");
                candidates.push(insight);
            }
        }

        candidates.retain(|i| {
            i.confidence >= self.config.min_confidence
                && i.sample_size >= self.config.min_sample_size
        });
        if !self.config.include_achievements {
            candidates.retain(|i| i.category != InsightCategory::Achievement);
        }

        candidates.sort_by(|a, b| {
            scoring::priority_score(b)
                .partial_cmp(&scoring::priority_score(a))
                .unwrap_or(Ordering::Equal)
        });
        candidates.truncate(self.config.max_insights);

        debug!(count = candidates.len(), "insights generated");
        candidates
    }
}

/// Filter an insight list against criteria, preserving its order.
#[must_use]
pub fn filter_insights(insights: &[Insight], criteria: &InsightFilter) -> Vec<Insight> {
    insights
        .iter()
        .filter(|i| criteria.category.is_none_or(|c| i.category == c))
        .filter(|i| criteria.priority.is_none_or(|p| i.priority == p))
        .filter(|i| criteria.min_confidence.is_none_or(|m| i.confidence >= m))
        .filter(|i| !criteria.actionable_only || i.actionable)
        .filter(|i| criteria.timeframe.is_none_or(|t| i.timeframe == t))
        .filter(|i| criteria.difficulty.is_none_or(|d| i.difficulty == d))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityRecordBuilder;
    use chrono::{Duration, TimeZone, Utc};

    fn steady_runs(count: usize) -> Vec<ActivityRecord> {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 7, 0, 0).unwrap();
        (0..count)
            .map(|i| {
                #[allow(clippy::cast_possible_wrap)]
                let day = i as i64 * 2;
                ActivityRecordBuilder::new(
                    format!("r{i}"),
                    start + Duration::days(day),
                    5000.0,
                    1650,
                )
                .build()
            })
            .collect()
    }

    #[test]
    fn below_minimum_sample_returns_empty() {
        let engine = InsightEngine::new();
        assert!(engine.generate_insights(&steady_runs(2)).is_empty());
    }

    #[test]
    fn output_respects_configured_bounds() {
        let engine = InsightEngine::new();
        let insights = engine.generate_insights(&steady_runs(25));
        let config = InsightEngineConfig::default();

        assert!(insights.len() <= config.max_insights);
        for insight in &insights {
            assert!(insight.confidence >= config.min_confidence);
            assert!(insight.sample_size >= config.min_sample_size);
            assert!((0.0..=1.0).contains(&insight.confidence));
        }
    }

    #[test]
    fn achievements_can_be_excluded() {
        let engine = InsightEngine::with_config(InsightEngineConfig {
            include_achievements: false,
            ..InsightEngineConfig::default()
        });
        // 25 steady runs cross the 25-run and 10-run milestone bands.
        let insights = engine.generate_insights(&steady_runs(25));
        assert!(insights
            .iter()
            .all(|i| i.category != InsightCategory::Achievement));
    }

    #[test]
    fn filter_preserves_order_and_never_reranks() {
        let engine = InsightEngine::new();
        let insights = engine.generate_insights(&steady_runs(25));
        let filtered = filter_insights(&insights, &InsightFilter::default());

        let before: Vec<_> = insights.iter().map(|i| i.id).collect();
        let after: Vec<_> = filtered.iter().map(|i| i.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn filter_by_category_keeps_only_that_category() {
        let engine = InsightEngine::new();
        let insights = engine.generate_insights(&steady_runs(25));
        let filtered = filter_insights(
            &insights,
            &InsightFilter {
                category: Some(InsightCategory::Training),
                ..InsightFilter::default()
            },
        );
        assert!(filtered
            .iter()
            .all(|i| i.category == InsightCategory::Training));
    }
}

// ABOUTME: The pattern detector battery behind insight generation
// ABOUTME: Independent pure functions, each returning at most one finding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

//! The detector battery.
//!
//! Every detector is a pure function `(records) -> Option<Insight>` over the
//! chronologically sorted, quality-filtered record set, registered in
//! [`BATTERY`] and iterated by the engine. Each one is unit-testable in
//! isolation with a synthetic record set.

#![allow(clippy::cast_precision_loss)] // Record counts and durations stay well inside f64 range

use super::{DataQuality, Difficulty, Insight, InsightCategory, InsightPriority, InsightTimeframe};
use crate::constants::detectors::{
    ASSUMED_ATHLETE_AGE, COOL_TEMPERATURE_CELSIUS, DISTANCE_TREND_THRESHOLD_PERCENT,
    DISTANCE_TREND_WINDOW, FREQUENCY_MIN_RECORDS, FREQUENCY_WINDOW_DAYS, HIGH_HR_LOAD_FRACTION,
    PACE_TREND_MIN_BASELINE, PACE_TREND_THRESHOLD_PERCENT, PACE_TREND_WINDOW,
    RECENT_PR_WINDOW_DAYS, RECOVERY_BACK_TO_BACK_SHARE, UNSAFE_WEEKLY_GROWTH_PERCENT,
    VARIETY_CV_THRESHOLD, WARM_TEMPERATURE_CELSIUS, WEATHER_MIN_BUCKET_SIZE,
    WEEKDAY_PATTERN_SHARE,
};
use crate::constants::milestones::{DISTANCE_BANDS_KM, RUN_COUNT_BANDS};
use crate::models::ActivityRecord;
use chrono::{Datelike, Duration, Weekday};
use serde_json::json;
use std::collections::HashMap;
use uuid::Uuid;

/// A registered pattern detector
pub type Detector = fn(&[ActivityRecord]) -> Option<Insight>;

/// The fixed battery run by the engine, in registration order.
/// Order carries no meaning; ranking happens in scoring.
pub const BATTERY: &[Detector] = &[
    pace_trend,
    distance_progression,
    weekly_frequency,
    weather_sensitivity,
    weekday_pattern,
    training_variety,
    recovery_pattern,
    heart_rate_load,
    recent_personal_record,
    milestone,
];

/// Deterministic insight identity derived from the detector key, so an
/// external dismissal store can key on it across invocations.
fn insight_id(key: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes())
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

fn mean_pace(records: &[ActivityRecord]) -> Option<f64> {
    let paces: Vec<f64> = records
        .iter()
        .filter_map(ActivityRecord::pace_seconds_per_km)
        .collect();
    if paces.is_empty() {
        None
    } else {
        Some(mean(&paces))
    }
}

fn format_pace(seconds_per_km: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let total = seconds_per_km.round() as i64;
    format!("{}:{:02} min/km", total / 60, total % 60)
}

fn quality_for_sample(n: usize) -> DataQuality {
    if n >= 20 {
        DataQuality::High
    } else if n >= 10 {
        DataQuality::Medium
    } else {
        DataQuality::Low
    }
}

/// Mean pace over the last 10 runs against everything before them.
/// Fires when the change is at least 3% in either direction.
pub fn pace_trend(records: &[ActivityRecord]) -> Option<Insight> {
    let n = records.len();
    if n < PACE_TREND_WINDOW + PACE_TREND_MIN_BASELINE {
        return None;
    }

    let split = n - PACE_TREND_WINDOW;
    let earlier = mean_pace(&records[..split])?;
    let recent = mean_pace(&records[split..])?;
    let delta_percent = (recent - earlier) / earlier * 100.0;
    if delta_percent.abs() < PACE_TREND_THRESHOLD_PERCENT {
        return None;
    }

    // Lower pace is faster.
    let improving = delta_percent < 0.0;
    let confidence = (delta_percent.abs() - PACE_TREND_THRESHOLD_PERCENT)
        .mul_add(0.02, 0.6)
        .min(0.9);

    let (priority, interpretation, recommendation) = if improving {
        (
            InsightPriority::Medium,
            "Your aerobic fitness is responding to the current training mix.".to_owned(),
            "Keep the current routine; resist the urge to add intensity on top of it.".to_owned(),
        )
    } else if delta_percent >= 5.0 {
        (
            InsightPriority::High,
            "A slowdown this size usually means accumulated fatigue or interrupted training."
                .to_owned(),
            "Take an easy week with reduced volume and check your sleep before pushing again."
                .to_owned(),
        )
    } else {
        (
            InsightPriority::Medium,
            "Pace has drifted slower; small slowdowns are often fatigue or heat.".to_owned(),
            "Plan one fully easy run this week and reassess after a few sessions.".to_owned(),
        )
    };

    Some(Insight {
        id: insight_id("pace_trend"),
        category: InsightCategory::Performance,
        priority,
        finding: format!(
            "Average pace over your last {PACE_TREND_WINDOW} runs is {:.1}% {} than before ({} vs {})",
            delta_percent.abs(),
            if improving { "faster" } else { "slower" },
            format_pace(recent),
            format_pace(earlier),
        ),
        interpretation,
        recommendation,
        confidence,
        sample_size: n,
        data_quality: quality_for_sample(n),
        actionable: !improving,
        difficulty: Difficulty::Easy,
        timeframe: if improving {
            InsightTimeframe::ShortTerm
        } else {
            InsightTimeframe::Immediate
        },
        metrics: json!({
            "direction": if improving { "improving" } else { "declining" },
            "recent_mean_pace_s_per_km": recent,
            "earlier_mean_pace_s_per_km": earlier,
            "delta_percent": delta_percent,
            "window": PACE_TREND_WINDOW,
        }),
    })
}

/// Mean distance over the last 5 runs against everything before them.
/// Flags growth beyond 10% per week as an injury risk.
pub fn distance_progression(records: &[ActivityRecord]) -> Option<Insight> {
    let n = records.len();
    if n < DISTANCE_TREND_WINDOW + 3 {
        return None;
    }

    let split = n - DISTANCE_TREND_WINDOW;
    let earlier: Vec<f64> = records[..split]
        .iter()
        .map(ActivityRecord::distance_meters)
        .collect();
    let recent: Vec<f64> = records[split..]
        .iter()
        .map(ActivityRecord::distance_meters)
        .collect();
    let earlier_mean = mean(&earlier);
    let recent_mean = mean(&recent);
    if earlier_mean <= 0.0 {
        return None;
    }

    let delta_percent = (recent_mean - earlier_mean) / earlier_mean * 100.0;
    if delta_percent.abs() < DISTANCE_TREND_THRESHOLD_PERCENT {
        return None;
    }

    let confidence = (delta_percent.abs() - DISTANCE_TREND_THRESHOLD_PERCENT)
        .mul_add(0.01, 0.6)
        .min(0.85);

    // Weekly growth rate, measured between the midpoints of the two groups.
    let earlier_mid = records[split / 2].start_date();
    let recent_mid = records[split + (n - split) / 2].start_date();
    let weeks = ((recent_mid - earlier_mid).num_days() as f64 / 7.0).max(1.0);
    let weekly_growth = delta_percent / weeks;

    let base_metrics = json!({
        "recent_mean_distance_m": recent_mean,
        "earlier_mean_distance_m": earlier_mean,
        "delta_percent": delta_percent,
        "weekly_growth_percent": weekly_growth,
    });

    if delta_percent > 0.0 && weekly_growth > UNSAFE_WEEKLY_GROWTH_PERCENT {
        return Some(Insight {
            id: insight_id("distance_ramp"),
            category: InsightCategory::Health,
            priority: InsightPriority::High,
            finding: format!(
                "Run distance is growing about {weekly_growth:.0}% per week, well past the 10% guideline"
            ),
            interpretation: "Ramping volume this fast is a common precursor to overuse injury."
                .to_owned(),
            recommendation: "Hold distance flat for a week or two before increasing again."
                .to_owned(),
            confidence,
            sample_size: n,
            data_quality: quality_for_sample(n),
            actionable: true,
            difficulty: Difficulty::Easy,
            timeframe: InsightTimeframe::Immediate,
            metrics: base_metrics,
        });
    }

    let increasing = delta_percent > 0.0;
    Some(Insight {
        id: insight_id("distance_progression"),
        category: InsightCategory::Training,
        priority: if increasing {
            InsightPriority::Medium
        } else {
            InsightPriority::Low
        },
        finding: format!(
            "Average distance of your last {DISTANCE_TREND_WINDOW} runs is {:.0}% {} than before ({:.1} km vs {:.1} km)",
            delta_percent.abs(),
            if increasing { "longer" } else { "shorter" },
            recent_mean / 1000.0,
            earlier_mean / 1000.0,
        ),
        interpretation: if increasing {
            "You are building endurance volume at a sustainable rate.".to_owned()
        } else {
            "Volume has dropped; that is fine for a recovery block, less so long term.".to_owned()
        },
        recommendation: if increasing {
            "Continue the gradual build and keep one long run per week.".to_owned()
        } else {
            "If the drop is unintentional, add distance back to one run per week.".to_owned()
        },
        confidence,
        sample_size: n,
        data_quality: quality_for_sample(n),
        actionable: !increasing,
        difficulty: Difficulty::Moderate,
        timeframe: InsightTimeframe::ShortTerm,
        metrics: base_metrics,
    })
}

/// Runs per week over the trailing 30 days, bucketed.
pub fn weekly_frequency(records: &[ActivityRecord]) -> Option<Insight> {
    if records.len() < FREQUENCY_MIN_RECORDS {
        return None;
    }

    let anchor = records.last()?.start_date();
    let window_start = anchor - Duration::days(FREQUENCY_WINDOW_DAYS);
    let count = records
        .iter()
        .filter(|r| r.start_date() > window_start)
        .count();
    let runs_per_week = count as f64 * 7.0 / FREQUENCY_WINDOW_DAYS as f64;

    let (category, priority, actionable, interpretation, recommendation, confidence) =
        if runs_per_week < 2.0 {
            (
                InsightCategory::Consistency,
                InsightPriority::Medium,
                true,
                "Below two runs a week, fitness gains are hard to hold onto.".to_owned(),
                "Aim for two or three short runs a week; consistency beats volume.".to_owned(),
                0.7,
            )
        } else if runs_per_week <= 3.5 {
            (
                InsightCategory::Consistency,
                InsightPriority::Low,
                false,
                "Two to three runs a week is a solid recreational base.".to_owned(),
                "Maintain the rhythm; add a fourth run only when these feel routine.".to_owned(),
                0.75,
            )
        } else if runs_per_week < 6.0 {
            (
                InsightCategory::Consistency,
                InsightPriority::Low,
                false,
                "Four to five runs a week is a strong, structured habit.".to_owned(),
                "Keep at least one fully easy day between harder sessions.".to_owned(),
                0.75,
            )
        } else {
            (
                InsightCategory::Health,
                InsightPriority::Medium,
                true,
                "Six or more runs a week leaves little room for recovery.".to_owned(),
                "Protect one full rest day per week to absorb the training.".to_owned(),
                0.7,
            )
        };

    Some(Insight {
        id: insight_id("weekly_frequency"),
        category,
        priority,
        finding: format!(
            "You averaged {runs_per_week:.1} runs per week over the last {FREQUENCY_WINDOW_DAYS} days ({count} runs)"
        ),
        interpretation,
        recommendation,
        confidence,
        sample_size: count,
        data_quality: quality_for_sample(count),
        actionable,
        difficulty: Difficulty::Easy,
        timeframe: InsightTimeframe::Immediate,
        metrics: json!({
            "runs_in_window": count,
            "runs_per_week": runs_per_week,
            "window_days": FREQUENCY_WINDOW_DAYS,
        }),
    })
}

/// Mean pace in warm conditions (≥20 °C) against cool ones (<15 °C).
/// Fires only when warm runs are slower and both buckets have enough data.
pub fn weather_sensitivity(records: &[ActivityRecord]) -> Option<Insight> {
    let mut cool = Vec::new();
    let mut warm = Vec::new();
    for record in records {
        let Some(weather) = record.weather() else {
            continue;
        };
        let Some(pace) = record.pace_seconds_per_km() else {
            continue;
        };
        if weather.temperature_celsius < COOL_TEMPERATURE_CELSIUS {
            cool.push(pace);
        } else if weather.temperature_celsius >= WARM_TEMPERATURE_CELSIUS {
            warm.push(pace);
        }
    }

    if cool.len() < WEATHER_MIN_BUCKET_SIZE || warm.len() < WEATHER_MIN_BUCKET_SIZE {
        return None;
    }

    let cool_mean = mean(&cool);
    let warm_mean = mean(&warm);
    if warm_mean <= cool_mean {
        return None;
    }

    let delta_percent = (warm_mean - cool_mean) / cool_mean * 100.0;
    let confidence = delta_percent.mul_add(0.02, 0.55).min(0.8);
    let sample = cool.len() + warm.len();

    Some(Insight {
        id: insight_id("weather_sensitivity"),
        category: InsightCategory::Training,
        priority: if delta_percent > 5.0 {
            InsightPriority::Medium
        } else {
            InsightPriority::Low
        },
        finding: format!(
            "You run {delta_percent:.1}% slower in warm weather ({} above {WARM_TEMPERATURE_CELSIUS:.0}°C vs {} below {COOL_TEMPERATURE_CELSIUS:.0}°C)",
            format_pace(warm_mean),
            format_pace(cool_mean),
        ),
        interpretation: "Heat slows everyone; the size of the gap shows how much it costs you."
            .to_owned(),
        recommendation:
            "On warm days start earlier, slow your target pace, and judge the run by effort."
                .to_owned(),
        confidence,
        sample_size: sample,
        data_quality: quality_for_sample(sample),
        actionable: true,
        difficulty: Difficulty::Easy,
        timeframe: InsightTimeframe::Immediate,
        metrics: json!({
            "cool_mean_pace_s_per_km": cool_mean,
            "warm_mean_pace_s_per_km": warm_mean,
            "delta_percent": delta_percent,
            "cool_runs": cool.len(),
            "warm_runs": warm.len(),
        }),
    })
}

/// Mode of the weekday histogram, when one day holds ≥25% of all runs.
/// A dominant day is meaningful even in a short history, so the only gate
/// is the engine-wide sample floor.
pub fn weekday_pattern(records: &[ActivityRecord]) -> Option<Insight> {
    let n = records.len();
    if n < 3 {
        return None;
    }

    let mut counts: HashMap<Weekday, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.start_date().weekday()).or_insert(0) += 1;
    }

    // Fixed weekday order keeps ties deterministic.
    let week = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    let (top_day, top_count) = week
        .iter()
        .map(|day| (*day, counts.get(day).copied().unwrap_or(0)))
        .max_by_key(|(_, count)| *count)?;

    let share = top_count as f64 / n as f64;
    if share < WEEKDAY_PATTERN_SHARE {
        return None;
    }

    let day_frequencies: HashMap<String, usize> = counts
        .iter()
        .map(|(day, count)| (format!("{day:?}"), *count))
        .collect();

    Some(Insight {
        id: insight_id("weekday_pattern"),
        category: InsightCategory::Consistency,
        priority: InsightPriority::Low,
        finding: format!(
            "{top_day:?} is your most common running day ({top_count} of {n} runs)"
        ),
        interpretation: "A fixed anchor day is a strong sign of a durable habit.".to_owned(),
        recommendation: format!(
            "Treat {top_day:?} as non-negotiable and plan the rest of the week around it."
        ),
        confidence: share.mul_add(0.5, 0.5).min(0.85),
        sample_size: n,
        data_quality: quality_for_sample(n),
        actionable: false,
        difficulty: Difficulty::Easy,
        timeframe: InsightTimeframe::LongTerm,
        metrics: json!({
            "top_day": format!("{top_day:?}"),
            "top_count": top_count,
            "share": share,
            "day_frequencies": day_frequencies,
        }),
    })
}

/// Coefficient of variation of run distances; fires when runs are too samey.
pub fn training_variety(records: &[ActivityRecord]) -> Option<Insight> {
    let n = records.len();
    if n < 5 {
        return None;
    }

    let distances: Vec<f64> = records
        .iter()
        .map(ActivityRecord::distance_meters)
        .collect();
    let distance_mean = mean(&distances);
    if distance_mean <= 0.0 {
        return None;
    }
    let cv = std_dev(&distances, distance_mean) / distance_mean;
    if cv >= VARIETY_CV_THRESHOLD {
        return None;
    }

    Some(Insight {
        id: insight_id("training_variety"),
        category: InsightCategory::Training,
        priority: InsightPriority::Medium,
        finding: format!(
            "Your runs are nearly all the same distance (variation {:.0}% around {:.1} km)",
            cv * 100.0,
            distance_mean / 1000.0,
        ),
        interpretation:
            "Identical runs train one system; mixing distances develops speed and endurance together."
                .to_owned(),
        recommendation:
            "Make one run per week noticeably longer and one noticeably shorter or faster."
                .to_owned(),
        confidence: (VARIETY_CV_THRESHOLD - cv).mul_add(1.0, 0.6).min(0.8),
        sample_size: n,
        data_quality: quality_for_sample(n),
        actionable: true,
        difficulty: Difficulty::Easy,
        timeframe: InsightTimeframe::ShortTerm,
        metrics: json!({
            "coefficient_of_variation": cv,
            "mean_distance_m": distance_mean,
        }),
    })
}

/// Share of runs started within a day of the previous one.
pub fn recovery_pattern(records: &[ActivityRecord]) -> Option<Insight> {
    let n = records.len();
    if n < 5 {
        return None;
    }

    let gaps: Vec<i64> = records
        .windows(2)
        .map(|pair| (pair[1].start_date() - pair[0].start_date()).num_hours())
        .collect();
    let back_to_back = gaps.iter().filter(|&&hours| hours < 24).count();
    let ratio = back_to_back as f64 / gaps.len() as f64;
    if ratio < RECOVERY_BACK_TO_BACK_SHARE {
        return None;
    }

    Some(Insight {
        id: insight_id("recovery_pattern"),
        category: InsightCategory::Health,
        priority: if ratio >= 0.5 {
            InsightPriority::High
        } else {
            InsightPriority::Medium
        },
        finding: format!(
            "{:.0}% of your runs start within a day of the previous one ({back_to_back} of {} gaps)",
            ratio * 100.0,
            gaps.len(),
        ),
        interpretation: "Frequent back-to-back days compress recovery, where adaptation happens."
            .to_owned(),
        recommendation: "Space hard efforts with at least one rest or easy day between them."
            .to_owned(),
        confidence: ratio.mul_add(0.3, 0.6).min(0.85),
        sample_size: n,
        data_quality: quality_for_sample(n),
        actionable: true,
        difficulty: Difficulty::Easy,
        timeframe: InsightTimeframe::Immediate,
        metrics: json!({
            "back_to_back_gaps": back_to_back,
            "total_gaps": gaps.len(),
            "ratio": ratio,
        }),
    })
}

/// Mean heart rate against an age-estimated maximum (220 − age, assumed 35).
pub fn heart_rate_load(records: &[ActivityRecord]) -> Option<Insight> {
    let heart_rates: Vec<f64> = records
        .iter()
        .filter_map(|r| r.average_heart_rate().map(f64::from))
        .collect();
    if heart_rates.len() < 3 {
        return None;
    }

    let mean_hr = mean(&heart_rates);
    let estimated_max = f64::from(220 - ASSUMED_ATHLETE_AGE);
    let fraction = mean_hr / estimated_max;
    if fraction < HIGH_HR_LOAD_FRACTION {
        return None;
    }

    Some(Insight {
        id: insight_id("heart_rate_load"),
        category: InsightCategory::Health,
        priority: InsightPriority::High,
        finding: format!(
            "Average heart rate across your runs is {mean_hr:.0} bpm, {:.0}% of your estimated maximum",
            fraction * 100.0,
        ),
        interpretation:
            "Most running should sit well below this intensity; living near the ceiling invites burnout."
                .to_owned(),
        recommendation:
            "Slow your easy runs until conversation is comfortable; save high heart rates for one workout a week."
                .to_owned(),
        confidence: (fraction - HIGH_HR_LOAD_FRACTION).mul_add(1.0, 0.6).min(0.8),
        sample_size: heart_rates.len(),
        data_quality: quality_for_sample(heart_rates.len()),
        actionable: true,
        difficulty: Difficulty::Moderate,
        timeframe: InsightTimeframe::Immediate,
        metrics: json!({
            "mean_heart_rate_bpm": mean_hr,
            "estimated_max_bpm": estimated_max,
            "fraction_of_max": fraction,
        }),
    })
}

/// Best-ever pace, when it was set within the last 30 days of the history.
pub fn recent_personal_record(records: &[ActivityRecord]) -> Option<Insight> {
    let anchor = records.last()?.start_date();

    // First record to reach the minimum pace holds the record; later equal
    // paces are not new PRs.
    let mut best: Option<&ActivityRecord> = None;
    let mut best_pace = f64::INFINITY;
    for record in records {
        if let Some(pace) = record.pace_seconds_per_km() {
            if pace < best_pace {
                best_pace = pace;
                best = Some(record);
            }
        }
    }
    let best = best?;

    if (anchor - best.start_date()).num_days() > RECENT_PR_WINDOW_DAYS {
        return None;
    }

    Some(Insight {
        id: insight_id("recent_personal_record"),
        category: InsightCategory::Achievement,
        priority: InsightPriority::Medium,
        finding: format!(
            "You set your best-ever pace of {} on {}",
            format_pace(best_pace),
            best.start_date().format("%Y-%m-%d"),
        ),
        interpretation: "A fresh personal record means your training is translating into speed."
            .to_owned(),
        recommendation: "Enjoy it, then return to mostly easy running; records come from patience."
            .to_owned(),
        confidence: 0.8,
        sample_size: records.len(),
        data_quality: quality_for_sample(records.len()),
        actionable: false,
        difficulty: Difficulty::Easy,
        timeframe: InsightTimeframe::Immediate,
        metrics: json!({
            "best_pace_s_per_km": best_pace,
            "set_on": best.start_date().to_rfc3339(),
        }),
    })
}

/// Cumulative distance or run-count crossing a fixed milestone band.
pub fn milestone(records: &[ActivityRecord]) -> Option<Insight> {
    let count = records.len();
    let last = records.last()?;
    let total_km: f64 = records
        .iter()
        .map(|r| r.distance_meters() / 1000.0)
        .sum();
    let last_km = last.distance_meters() / 1000.0;

    // A band counts as crossed when the most recent run carried the total over it.
    let distance_band = DISTANCE_BANDS_KM
        .iter()
        .rev()
        .find(|&&band| total_km >= band && total_km - last_km < band)
        .copied();
    let count_band = RUN_COUNT_BANDS.iter().find(|&&band| band == count).copied();

    let finding = match (distance_band, count_band) {
        (Some(km), Some(runs)) => format!(
            "Milestone double: you passed {km:.0} km lifetime distance and logged run number {runs}"
        ),
        (Some(km), None) => format!(
            "You passed {km:.0} km of lifetime running distance ({total_km:.0} km total)"
        ),
        (None, Some(runs)) => format!("You just logged run number {runs}"),
        (None, None) => return None,
    };

    Some(Insight {
        id: insight_id("milestone"),
        category: InsightCategory::Achievement,
        priority: InsightPriority::Medium,
        finding,
        interpretation: "Cumulative milestones are the clearest proof the habit is sticking."
            .to_owned(),
        recommendation: "Mark the occasion, then set your sights on the next band.".to_owned(),
        confidence: 0.9,
        sample_size: count,
        data_quality: quality_for_sample(count),
        actionable: false,
        difficulty: Difficulty::Easy,
        timeframe: InsightTimeframe::Immediate,
        metrics: json!({
            "total_distance_km": total_km,
            "total_runs": count,
            "distance_band_km": distance_band,
            "run_count_band": count_band,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityRecordBuilder, WeatherSnapshot};
    use chrono::{TimeZone, Utc};

    fn run_on_day(day: i64, distance_m: f64, moving_s: u64) -> ActivityRecord {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 7, 0, 0).unwrap();
        ActivityRecordBuilder::new(
            format!("d{day}"),
            start + Duration::days(day),
            distance_m,
            moving_s,
        )
        .build()
    }

    #[test]
    fn pace_trend_detects_improvement() {
        // 5 earlier runs at 5:30/km, then 10 runs 5% faster.
        let mut records: Vec<_> = (0..5).map(|i| run_on_day(i * 2, 5000.0, 1650)).collect();
        records.extend((5..15).map(|i| run_on_day(i * 2, 5000.0, 1567)));

        let insight = pace_trend(&records).expect("trend should fire");
        assert_eq!(insight.category, InsightCategory::Performance);
        assert_eq!(insight.metrics["direction"], "improving");
        assert!(insight.confidence >= 0.6);
    }

    #[test]
    fn pace_trend_quiet_when_stable() {
        let records: Vec<_> = (0..15).map(|i| run_on_day(i * 2, 5000.0, 1650)).collect();
        assert!(pace_trend(&records).is_none());
    }

    #[test]
    fn pace_trend_flags_decline_as_actionable() {
        let mut records: Vec<_> = (0..5).map(|i| run_on_day(i * 2, 5000.0, 1650)).collect();
        records.extend((5..15).map(|i| run_on_day(i * 2, 5000.0, 1780)));

        let insight = pace_trend(&records).expect("trend should fire");
        assert_eq!(insight.metrics["direction"], "declining");
        assert!(insight.actionable);
    }

    #[test]
    fn fast_distance_ramp_is_a_health_warning() {
        // 8 km runs, then five runs jumping to 14 km within two weeks.
        let mut records: Vec<_> = (0..6).map(|i| run_on_day(i * 2, 8000.0, 2900)).collect();
        records.extend((6..11).map(|i| run_on_day(i * 2, 14_000.0, 5100)));

        let insight = distance_progression(&records).expect("ramp should fire");
        assert_eq!(insight.category, InsightCategory::Health);
        assert_eq!(insight.priority, InsightPriority::High);
    }

    #[test]
    fn weather_sensitivity_needs_full_buckets() {
        let start = Utc.with_ymd_and_hms(2026, 6, 1, 7, 0, 0).unwrap();
        let with_temp = |day: i64, temp: f32, moving_s: u64| {
            ActivityRecordBuilder::new(
                format!("w{day}"),
                start + Duration::days(day),
                5000.0,
                moving_s,
            )
            .weather(WeatherSnapshot {
                temperature_celsius: temp,
                humidity_percent: None,
                wind_speed_ms: None,
                condition: None,
            })
            .build()
        };

        // Two cool runs only: below the bucket minimum, no insight.
        let thin: Vec<_> = vec![
            with_temp(0, 10.0, 1600),
            with_temp(2, 12.0, 1610),
            with_temp(4, 25.0, 1750),
            with_temp(6, 24.0, 1740),
            with_temp(8, 26.0, 1760),
        ];
        assert!(weather_sensitivity(&thin).is_none());

        // Third cool run fills the bucket; warm runs are clearly slower.
        let mut full = thin;
        full.push(with_temp(10, 11.0, 1590));
        let insight = weather_sensitivity(&full).expect("should fire");
        assert!(insight.metrics["delta_percent"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn recovery_pattern_fires_on_back_to_back_days() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        // Runs on consecutive days, each an hour earlier: every gap is 23 hours.
        let records: Vec<_> = (0..8)
            .map(|i| {
                ActivityRecordBuilder::new(
                    format!("c{i}"),
                    start + Duration::days(i) - Duration::hours(i),
                    5000.0,
                    1650,
                )
                .build()
            })
            .collect();

        let insight = recovery_pattern(&records).expect("should fire");
        assert_eq!(insight.category, InsightCategory::Health);
        assert_eq!(insight.priority, InsightPriority::High);
    }

    #[test]
    fn weekday_pattern_fires_on_a_short_consistent_history() {
        // Five runs, three of them on Thursdays: 60% share.
        let records: Vec<_> = [0, 1, 2, 7, 14]
            .iter()
            .map(|&day| run_on_day(day, 5000.0, 1650))
            .collect();

        let insight = weekday_pattern(&records).expect("dominant day should fire");
        assert_eq!(insight.metrics["top_count"], 3);
        assert!(insight.confidence >= 0.6);
    }

    #[test]
    fn weekday_pattern_quiet_without_a_dominant_day() {
        // Runs every two days cycle through all weekdays evenly.
        let records: Vec<_> = (0..14).map(|i| run_on_day(i * 2, 5000.0, 1650)).collect();
        assert!(weekday_pattern(&records).is_none());
    }

    #[test]
    fn milestone_fires_on_exact_run_count_band() {
        let records: Vec<_> = (0..10).map(|i| run_on_day(i * 3, 5000.0, 1650)).collect();
        let insight = milestone(&records).expect("10th run crosses a band");
        assert_eq!(insight.category, InsightCategory::Achievement);
        assert_eq!(insight.metrics["run_count_band"], 10);
    }

    #[test]
    fn milestone_quiet_between_bands() {
        let records: Vec<_> = (0..12).map(|i| run_on_day(i * 3, 4000.0, 1400)).collect();
        // 12 runs, 48 km total: no band crossed.
        assert!(milestone(&records).is_none());
    }

    #[test]
    fn heart_rate_load_fires_near_estimated_max() {
        let records: Vec<_> = (0..6)
            .map(|i| {
                let start = Utc.with_ymd_and_hms(2026, 1, 1, 7, 0, 0).unwrap();
                ActivityRecordBuilder::new(
                    format!("h{i}"),
                    start + Duration::days(i * 2),
                    5000.0,
                    1650,
                )
                .average_heart_rate(160)
                .build()
            })
            .collect();

        // 160 bpm against an estimated max of 185 is 86%.
        let insight = heart_rate_load(&records).expect("should fire");
        assert_eq!(insight.priority, InsightPriority::High);
    }

    #[test]
    fn recent_pr_only_counts_fresh_records() {
        // Best pace set on day 0, history continues for 90 days: stale.
        let mut records = vec![run_on_day(0, 5000.0, 1400)];
        records.extend((1..13).map(|i| run_on_day(i * 7, 5000.0, 1650)));
        assert!(recent_personal_record(&records).is_none());

        // Best pace on the final day: fresh.
        records.push(run_on_day(92, 5000.0, 1390));
        let insight = recent_personal_record(&records).expect("should fire");
        assert_eq!(insight.category, InsightCategory::Achievement);
    }
}

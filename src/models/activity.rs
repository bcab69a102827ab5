// ABOUTME: ActivityRecord model for completed exercise sessions
// ABOUTME: Immutable input owned by the ingestion collaborator, read-only here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Labs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed exercise session.
///
/// Records are immutable inputs owned by the ingestion collaborator; the
/// analytics core only reads them. Construct with [`ActivityRecordBuilder`].
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use stride_intelligence::ActivityRecordBuilder;
///
/// let record = ActivityRecordBuilder::new("run-1", Utc::now(), 5000.0, 1500)
///     .average_heart_rate(152)
///     .elevation_gain(40.0)
///     .build();
///
/// assert_eq!(record.id(), "run-1");
/// assert_eq!(record.pace_seconds_per_km(), Some(300.0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Unique identifier (provider-specific)
    id: String,
    /// Human-readable name of the session
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Local start timestamp, normalized to UTC by the ingestion layer
    start_date: DateTime<Utc>,
    /// Total distance covered in meters
    distance_meters: f64,
    /// Time spent moving, in seconds
    moving_time_seconds: u64,
    /// Wall-clock duration including pauses, in seconds
    elapsed_time_seconds: u64,
    /// Average heart rate during the session (BPM)
    #[serde(skip_serializing_if = "Option::is_none")]
    average_heart_rate: Option<u32>,
    /// Total elevation gained in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    elevation_gain: Option<f64>,
    /// Weather conditions at session start
    #[serde(skip_serializing_if = "Option::is_none")]
    weather: Option<WeatherSnapshot>,
    /// Free-form location label
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

/// Weather conditions captured alongside an activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature (Celsius)
    pub temperature_celsius: f32,
    /// Relative humidity (percent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_percent: Option<f32>,
    /// Wind speed (m/s)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed_ms: Option<f32>,
    /// Human-readable condition label ("clear", "rain", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl ActivityRecord {
    /// Unique identifier of the record
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Session name, if the provider supplied one
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Start timestamp
    #[must_use]
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Total distance in meters
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Moving time in seconds
    #[must_use]
    pub const fn moving_time_seconds(&self) -> u64 {
        self.moving_time_seconds
    }

    /// Elapsed time in seconds
    #[must_use]
    pub const fn elapsed_time_seconds(&self) -> u64 {
        self.elapsed_time_seconds
    }

    /// Average heart rate, if measured
    #[must_use]
    pub const fn average_heart_rate(&self) -> Option<u32> {
        self.average_heart_rate
    }

    /// Elevation gain in meters, if measured
    #[must_use]
    pub const fn elevation_gain(&self) -> Option<f64> {
        self.elevation_gain
    }

    /// Weather snapshot, if captured
    #[must_use]
    pub const fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    /// Location label, if captured
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Pace in seconds per kilometer, derived from moving time.
    ///
    /// `None` when distance or moving time is zero.
    #[must_use]
    pub fn pace_seconds_per_km(&self) -> Option<f64> {
        if self.distance_meters > 0.0 && self.moving_time_seconds > 0 {
            #[allow(clippy::cast_precision_loss)]
            let pace = self.moving_time_seconds as f64 / (self.distance_meters / 1000.0);
            Some(pace)
        } else {
            None
        }
    }

    /// Implied speed in km/h, derived from moving time
    #[must_use]
    pub fn speed_kmh(&self) -> Option<f64> {
        if self.distance_meters > 0.0 && self.moving_time_seconds > 0 {
            #[allow(clippy::cast_precision_loss)]
            let speed = (self.distance_meters / 1000.0) / (self.moving_time_seconds as f64 / 3600.0);
            Some(speed)
        } else {
            None
        }
    }
}

/// Builder for [`ActivityRecord`]
#[derive(Debug, Clone)]
pub struct ActivityRecordBuilder {
    record: ActivityRecord,
}

impl ActivityRecordBuilder {
    /// Start building a record from its required fields.
    ///
    /// Elapsed time defaults to the moving time until set explicitly.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        start_date: DateTime<Utc>,
        distance_meters: f64,
        moving_time_seconds: u64,
    ) -> Self {
        Self {
            record: ActivityRecord {
                id: id.into(),
                name: None,
                start_date,
                distance_meters,
                moving_time_seconds,
                elapsed_time_seconds: moving_time_seconds,
                average_heart_rate: None,
                elevation_gain: None,
                weather: None,
                location: None,
            },
        }
    }

    /// Set the session name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = Some(name.into());
        self
    }

    /// Set the elapsed (wall-clock) time
    #[must_use]
    pub const fn elapsed_time_seconds(mut self, seconds: u64) -> Self {
        self.record.elapsed_time_seconds = seconds;
        self
    }

    /// Set the average heart rate
    #[must_use]
    pub const fn average_heart_rate(mut self, bpm: u32) -> Self {
        self.record.average_heart_rate = Some(bpm);
        self
    }

    /// Set the elevation gain
    #[must_use]
    pub const fn elevation_gain(mut self, meters: f64) -> Self {
        self.record.elevation_gain = Some(meters);
        self
    }

    /// Attach a weather snapshot
    #[must_use]
    pub fn weather(mut self, weather: WeatherSnapshot) -> Self {
        self.record.weather = Some(weather);
        self
    }

    /// Set the location label
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.record.location = Some(location.into());
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> ActivityRecord {
        self.record
    }
}

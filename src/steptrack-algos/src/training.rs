use std::fmt::Display;

use chrono::TimeDelta;
use log::warn;
use serde::Serialize;
use steptrack_record::{RecordError, TrainingRecord};

use crate::{activity::ActivityKind, error::MetricsError, profile::BodyProfile};

/// Stride length as a fraction of body height.
const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;
/// Walking burns half of what running does at the same speed.
const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// Distance covered in km, with the stride derived from body height.
pub fn distance_km(steps: i64, height_m: f64) -> f64 {
    let step_length = height_m * STEP_LENGTH_COEFFICIENT;
    steps as f64 * step_length / M_IN_KM
}

/// Mean speed in km/h over the elapsed span.
///
/// Returns 0 for non-positive or sub-second spans instead of erroring;
/// callers that need a hard failure validate the span beforehand.
pub fn mean_speed_kmh(steps: i64, height_m: f64, duration: TimeDelta) -> f64 {
    if duration <= TimeDelta::zero() {
        return 0.0;
    }

    let hours = span_hours(duration);
    if hours == 0.0 {
        return 0.0;
    }

    distance_km(steps, height_m) / hours
}

/// Calories burned walking, in kcal.
pub fn walking_calories(
    steps: i64,
    profile: BodyProfile,
    duration: TimeDelta,
) -> Result<f64, MetricsError> {
    check_positive(steps, profile, duration)?;

    let speed = mean_speed_kmh(steps, profile.height_m, duration);
    let calories = profile.weight_kg * speed * span_minutes(duration) / MIN_IN_H;

    Ok(calories * WALKING_CALORIES_COEFFICIENT)
}

/// Calories burned running, in kcal.
pub fn running_calories(
    steps: i64,
    profile: BodyProfile,
    duration: TimeDelta,
) -> Result<f64, MetricsError> {
    check_positive(steps, profile, duration)?;

    let speed = mean_speed_kmh(steps, profile.height_m, duration);
    Ok(profile.weight_kg * speed * span_minutes(duration) / MIN_IN_H)
}

fn check_positive(
    steps: i64,
    profile: BodyProfile,
    duration: TimeDelta,
) -> Result<(), MetricsError> {
    if steps <= 0 {
        return Err(MetricsError::NonPositive {
            field: "step count",
        });
    }
    if profile.weight_kg <= 0.0 {
        return Err(MetricsError::NonPositive { field: "weight" });
    }
    if profile.height_m <= 0.0 {
        return Err(MetricsError::NonPositive { field: "height" });
    }
    if duration <= TimeDelta::zero() {
        return Err(MetricsError::NonPositive { field: "duration" });
    }

    Ok(())
}

fn span_hours(duration: TimeDelta) -> f64 {
    duration.num_seconds() as f64 / 3600.0
}

fn span_minutes(duration: TimeDelta) -> f64 {
    duration.num_seconds() as f64 / 60.0
}

/// Derived metrics for one training record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrainingSummary {
    pub activity: ActivityKind,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl TrainingSummary {
    pub fn compute(record: &TrainingRecord, profile: BodyProfile) -> Result<Self, MetricsError> {
        let activity: ActivityKind = record.activity.parse()?;
        let calories = match activity {
            ActivityKind::Walking => walking_calories(record.steps, profile, record.duration)?,
            ActivityKind::Running => running_calories(record.steps, profile, record.duration)?,
        };

        Ok(Self {
            activity,
            duration_h: span_hours(record.duration),
            distance_km: distance_km(record.steps, profile.height_m),
            mean_speed_kmh: mean_speed_kmh(record.steps, profile.height_m, record.duration),
            calories,
        })
    }
}

impl Display for TrainingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}\n",
            self.activity, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories
        ))
    }
}

/// Parses a 3-field training record and renders the five-line summary.
///
/// The first error encountered is returned to the caller untouched; parse
/// rejects are additionally logged.
pub fn training_report(input: &str, profile: BodyProfile) -> Result<String, MetricsError> {
    let record: TrainingRecord = input.parse().map_err(|e: RecordError| {
        warn!("rejected training record: {e}");
        MetricsError::from(e)
    })?;

    let summary = TrainingSummary::compute(&record, profile)?;
    Ok(summary.to_string())
}

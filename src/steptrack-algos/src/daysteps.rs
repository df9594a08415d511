use std::fmt::Display;

use log::warn;
use serde::Serialize;
use steptrack_record::StepRecord;

use crate::{error::MetricsError, profile::BodyProfile, training};

/// Fixed stride length for casual daily walking, in meters. Training
/// distance derives the stride from body height instead; the two formulas
/// are intentionally separate.
const STEP_LENGTH_M: f64 = 0.65;
const M_IN_KM: f64 = 1000.0;

/// Derived metrics for one daily step record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DailySummary {
    pub steps: i64,
    pub distance_km: f64,
    pub calories: f64,
}

impl DailySummary {
    pub fn compute(record: &StepRecord, profile: BodyProfile) -> Result<Self, MetricsError> {
        let calories = training::walking_calories(record.steps, profile, record.duration)?;

        Ok(Self {
            steps: record.steps,
            distance_km: record.steps as f64 * STEP_LENGTH_M / M_IN_KM,
            calories,
        })
    }
}

impl Display for DailySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.\n",
            self.steps, self.distance_km, self.calories
        ))
    }
}

/// Best-effort daily report: any malformed or invalid record is logged and
/// collapses to an empty string, so callers see either a complete summary
/// or nothing.
pub fn daily_steps_report(input: &str, profile: BodyProfile) -> String {
    let record: StepRecord = match input.parse() {
        Ok(record) => record,
        Err(e) => {
            warn!("rejected daily record: {e}");
            return String::new();
        }
    };

    match DailySummary::compute(&record, profile) {
        Ok(summary) => summary.to_string(),
        Err(e) => {
            warn!("daily report failed: {e}");
            String::new()
        }
    }
}

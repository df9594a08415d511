use std::str::FromStr;

use chrono::TimeDelta;

use crate::duration::parse_span;
use crate::error::RecordError;

const STEPS: &str = "step count";
const ACTIVITY: &str = "activity type";
const DURATION: &str = "duration";

/// A 2-field daily record, `"<steps>,<duration>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub steps: i64,
    pub duration: TimeDelta,
}

/// A 3-field training record, `"<steps>,<activity>,<duration>"`.
///
/// The activity label is only checked for non-emptiness here; matching it
/// against the recognized kinds happens at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRecord {
    pub steps: i64,
    pub activity: String,
    pub duration: TimeDelta,
}

impl FromStr for StepRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [steps, duration] = split_fields(s)?;
        Ok(Self {
            steps: parse_steps(steps)?,
            duration: parse_duration_field(duration)?,
        })
    }
}

impl FromStr for TrainingRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [steps, activity, duration] = split_fields(s)?;
        let steps = parse_steps(steps)?;
        if activity.is_empty() {
            return Err(RecordError::EmptyField { field: ACTIVITY });
        }

        Ok(Self {
            steps,
            activity: activity.to_string(),
            duration: parse_duration_field(duration)?,
        })
    }
}

fn split_fields<const N: usize>(input: &str) -> Result<[&str; N], RecordError> {
    let fields: Vec<&str> = input.split(',').map(str::trim).collect();
    let actual = fields.len();
    fields
        .try_into()
        .map_err(|_| RecordError::FieldCount { expected: N, actual })
}

fn numeric_field<'a>(raw: &'a str, field: &'static str) -> Result<&'a str, RecordError> {
    if raw.is_empty() {
        return Err(RecordError::EmptyField { field });
    }
    if raw.chars().any(char::is_whitespace) {
        return Err(RecordError::EmbeddedWhitespace { field });
    }
    Ok(raw)
}

fn parse_steps(raw: &str) -> Result<i64, RecordError> {
    let steps: i64 = numeric_field(raw, STEPS)?.parse()?;
    if steps <= 0 {
        return Err(RecordError::NonPositive { field: STEPS });
    }
    Ok(steps)
}

fn parse_duration_field(raw: &str) -> Result<TimeDelta, RecordError> {
    let span = parse_span(numeric_field(raw, DURATION)?)?;
    if span <= TimeDelta::zero() {
        return Err(RecordError::NonPositive { field: DURATION });
    }
    Ok(span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_record_basic() {
        let record: StepRecord = "1000,30m".parse().unwrap();
        assert_eq!(record.steps, 1000);
        assert_eq!(record.duration, TimeDelta::minutes(30));
    }

    #[test]
    fn step_record_trims_fields() {
        let record: StepRecord = " 678 , 1h30m ".parse().unwrap();
        assert_eq!(record.steps, 678);
        assert_eq!(record.duration, TimeDelta::minutes(90));
    }

    #[test]
    fn step_record_wrong_field_count() {
        assert_eq!(
            "1000".parse::<StepRecord>(),
            Err(RecordError::FieldCount {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            "1000,Бег,30m".parse::<StepRecord>(),
            Err(RecordError::FieldCount {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn step_record_empty_steps() {
        assert_eq!(
            ",30m".parse::<StepRecord>(),
            Err(RecordError::EmptyField {
                field: "step count"
            })
        );
    }

    #[test]
    fn step_record_non_integer_steps() {
        assert!(matches!(
            "abc,30m".parse::<StepRecord>(),
            Err(RecordError::InvalidSteps(_))
        ));
    }

    #[test]
    fn step_record_non_positive_steps() {
        let err = "-5,30m".parse::<StepRecord>().unwrap_err();
        assert_eq!(
            err,
            RecordError::NonPositive {
                field: "step count"
            }
        );
        let err = "0,30m".parse::<StepRecord>().unwrap_err();
        assert_eq!(
            err,
            RecordError::NonPositive {
                field: "step count"
            }
        );
    }

    #[test]
    fn step_record_empty_duration() {
        assert_eq!(
            "1000,".parse::<StepRecord>(),
            Err(RecordError::EmptyField { field: "duration" })
        );
    }

    #[test]
    fn step_record_bad_duration() {
        assert!(matches!(
            "1000,half an hour".parse::<StepRecord>(),
            Err(RecordError::EmbeddedWhitespace { field: "duration" })
        ));
        assert!(matches!(
            "1000,30x".parse::<StepRecord>(),
            Err(RecordError::InvalidDuration(_))
        ));
    }

    #[test]
    fn step_record_non_positive_duration() {
        assert_eq!(
            "1000,0s".parse::<StepRecord>(),
            Err(RecordError::NonPositive { field: "duration" })
        );
        assert_eq!(
            "1000,-30m".parse::<StepRecord>(),
            Err(RecordError::NonPositive { field: "duration" })
        );
    }

    #[test]
    fn training_record_basic() {
        let record: TrainingRecord = "3456,Бег,45m0s".parse().unwrap();
        assert_eq!(record.steps, 3456);
        assert_eq!(record.activity, "Бег");
        assert_eq!(record.duration, TimeDelta::minutes(45));
    }

    #[test]
    fn training_record_keeps_unrecognized_label() {
        // Label membership is not the parser's concern.
        let record: TrainingRecord = "1000,Плавание,10m".parse().unwrap();
        assert_eq!(record.activity, "Плавание");
    }

    #[test]
    fn training_record_wrong_field_count() {
        assert_eq!(
            "1000,30m".parse::<TrainingRecord>(),
            Err(RecordError::FieldCount {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn training_record_empty_activity() {
        assert_eq!(
            "1000,,30m".parse::<TrainingRecord>(),
            Err(RecordError::EmptyField {
                field: "activity type"
            })
        );
    }

    #[test]
    fn training_record_steps_with_embedded_whitespace() {
        assert_eq!(
            "10 00,Бег,30m".parse::<TrainingRecord>(),
            Err(RecordError::EmbeddedWhitespace {
                field: "step count"
            })
        );
    }

    #[test]
    fn training_record_checks_steps_before_activity() {
        let err = "0,,30m".parse::<TrainingRecord>().unwrap_err();
        assert_eq!(
            err,
            RecordError::NonPositive {
                field: "step count"
            }
        );
    }
}

use steptrack_record::RecordError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error("{field} must be positive")]
    NonPositive { field: &'static str },
    #[error("unknown activity type {0:?}")]
    UnknownActivity(String),
}

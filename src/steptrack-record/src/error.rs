use std::num::ParseIntError;

use thiserror::Error;

use crate::duration::SpanError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("bad record format: expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("{field} contains embedded whitespace")]
    EmbeddedWhitespace { field: &'static str },
    #[error("invalid step count: {0}")]
    InvalidSteps(#[from] ParseIntError),
    #[error("invalid duration: {0}")]
    InvalidDuration(#[from] SpanError),
    #[error("{field} must be positive")]
    NonPositive { field: &'static str },
}

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// Closed set of recognized training kinds. The labels are the record
/// vocabulary itself, so they stay in the source language of the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    #[serde(rename = "Ходьба")]
    Walking,
    #[serde(rename = "Бег")]
    Running,
}

impl Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ActivityKind::Walking => "Ходьба",
            ActivityKind::Running => "Бег",
        };

        write!(f, "{}", s)
    }
}

impl FromStr for ActivityKind {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ходьба" => Ok(ActivityKind::Walking),
            "Бег" => Ok(ActivityKind::Running),
            other => Err(MetricsError::UnknownActivity(other.to_string())),
        }
    }
}

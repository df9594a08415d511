mod error;
pub use error::MetricsError;

pub(crate) mod activity;
pub use activity::ActivityKind;

pub(crate) mod profile;
pub use profile::BodyProfile;

pub(crate) mod training;
pub use training::{
    TrainingSummary, distance_km, mean_speed_kmh, running_calories, training_report,
    walking_calories,
};

pub(crate) mod daysteps;
pub use daysteps::{DailySummary, daily_steps_report};

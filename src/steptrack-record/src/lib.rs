mod error;
pub use error::RecordError;

pub(crate) mod duration;
pub use duration::{SpanError, parse_span};

pub(crate) mod record;
pub use record::{StepRecord, TrainingRecord};

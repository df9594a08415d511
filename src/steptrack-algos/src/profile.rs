use serde::{Deserialize, Serialize};

/// Body parameters supplied with every call; never stored by the library.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl BodyProfile {
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        Self { weight_kg, height_m }
    }
}

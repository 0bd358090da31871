//! Score accumulator
//!
//! Deliberately dumb: no knowledge of round phase or thresholds. The
//! controller decides when mutation is allowed; this type just adds.

use serde::{Deserialize, Serialize};

/// Signed running score for one round
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreTracker {
    value: i32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a signed delta and return the new score
    pub fn apply_delta(&mut self, amount: i32) -> i32 {
        self.value += amount;
        self.value
    }

    /// Back to zero (round restart)
    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

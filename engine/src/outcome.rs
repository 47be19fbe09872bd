use std::fmt;

use num_bigint::BigUint;
use num_traits::One;
use serde::Serialize;

use crate::observer::serialize_decimal;

/// How a run ended. Neither outcome is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// The value reached exactly 1.
    Stabilized,
    /// The step limit was exhausted first. Convergence is not claimed.
    Halted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminationResult {
    pub outcome: Outcome,
    #[serde(serialize_with = "serialize_decimal")]
    pub final_value: BigUint,
    pub steps_taken: u64,
}

impl TerminationResult {
    pub(crate) fn new(final_value: BigUint, steps_taken: u64) -> Self {
        let outcome = if final_value.is_one() {
            Outcome::Stabilized
        } else {
            Outcome::Halted
        };
        Self {
            outcome,
            final_value,
            steps_taken,
        }
    }

    #[must_use]
    pub fn is_stabilized(&self) -> bool {
        self.outcome == Outcome::Stabilized
    }

    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.outcome == Outcome::Halted
    }
}

/// The final status line.
impl fmt::Display for TerminationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Stabilized => write!(f, "Stabilized to 1 in {} steps", self.steps_taken),
            Outcome::Halted => f.write_str("Halted: limit reached"),
        }
    }
}

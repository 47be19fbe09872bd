use std::fmt;

use serde::Serialize;

use lbox_types::Mode;

/// The transformation applied within a step.
///
/// A truncation step emits one phase. A packing step emits `Packing`, then
/// `TernaryGrowth` when the packed value is odd and above one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Truncation,
    Packing { mode: Mode },
    TernaryGrowth,
}

impl Phase {
    /// Trace label, e.g. `TRUNCATION`, `L-BOX B`, `TERNARY +1`.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Phase::Truncation => "TRUNCATION".to_string(),
            Phase::Packing { mode } => format!("L-BOX {mode}"),
            Phase::TernaryGrowth => "TERNARY +1".to_string(),
        }
    }

    /// Growth continues the step started by packing rather than opening one.
    #[must_use]
    pub const fn opens_step(self) -> bool {
        !matches!(self, Phase::TernaryGrowth)
    }

    #[must_use]
    pub const fn mode(self) -> Option<Mode> {
        match self {
            Phase::Packing { mode } => Some(mode),
            Phase::Truncation | Phase::TernaryGrowth => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

//! Bit-pair packing: the lossy two-bit reduction applied to odd values.
//!
//! Bits are scanned left to right in non-overlapping pairs:
//!
//! ```text
//! "11"                  -> "10"   carry generated
//! "01" (AI_PARADOX)     -> "10"   forced carry
//! anything else         -> "1"    collapse to one signal bit
//! ```
//!
//! A single trailing bit (odd length) follows the remainder rule: mode B
//! appends `"10"`, modes A and AI_PARADOX keep the bit as is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::numeral::{BinaryString, InvalidDigitError};

/// Packing strategy for a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    /// Keep the remainder bit.
    #[default]
    A,
    /// Force an even tail: the remainder becomes `"10"`.
    B,
    /// Mode A with a forced carry on `"01"` pairs.
    AiParadox,
}

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::A => "A",
            Mode::B => "B",
            Mode::AiParadox => "AI_PARADOX",
        }
    }

    /// Whether a `"01"` pair is promoted to a carry.
    #[must_use]
    pub const fn forces_carry(self) -> bool {
        matches!(self, Mode::AiParadox)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BinaryString {
    /// Pack these bits under `mode`.
    ///
    /// Output is never empty: a non-empty input emits at least one group.
    #[must_use]
    pub fn pack(&self, mode: Mode) -> BinaryString {
        let bits = self.as_bytes();
        let mut packed = String::with_capacity(bits.len() + 1);

        let mut pairs = bits.chunks_exact(2);
        for pair in pairs.by_ref() {
            match pair {
                b"11" => packed.push_str("10"),
                b"01" if mode.forces_carry() => packed.push_str("10"),
                _ => packed.push('1'),
            }
        }

        if let [last] = pairs.remainder() {
            match mode {
                Mode::B => packed.push_str("10"),
                Mode::A | Mode::AiParadox => packed.push(char::from(*last)),
            }
        }

        BinaryString::from_validated(packed)
    }
}

/// Validate `bits` as a binary numeral and pack it.
pub fn pack(bits: &str, mode: Mode) -> Result<BinaryString, InvalidDigitError> {
    let bits = BinaryString::new(bits)?;
    Ok(bits.pack(mode))
}

//! Validated run inputs.
//!
//! These types enforce invariants at construction time. Once you hold a value,
//! you know it satisfies all required constraints.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use thiserror::Error;

use crate::numeral::{InvalidDigitError, parse_decimal};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("start value must not be empty")]
    Empty,
    #[error("start value must be at least 1")]
    Zero,
    #[error("exponent {exponent} exceeds the maximum of {max}", max = Seed::MAX_EXPONENT)]
    ExponentTooLarge { exponent: BigUint },
    #[error("invalid start value: {0}")]
    Digits(#[from] InvalidDigitError),
}

/// Starting value for a run.
///
/// # Invariants
///
/// - Value is at least 1
///
/// # Parsing
///
/// Accepts a decimal integer (`10031980`) or a power expression
/// (`3^40`, `3**40`). Surrounding whitespace is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seed(BigUint);

impl Seed {
    /// Largest exponent accepted by the power form.
    pub const MAX_EXPONENT: u32 = 1 << 16;

    /// Start value used when none is supplied.
    pub const DEMO: u64 = 10_031_980;

    pub fn new(value: BigUint) -> Result<Self, SeedError> {
        if value.is_zero() {
            return Err(SeedError::Zero);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn demo() -> Self {
        Self(BigUint::from(Self::DEMO))
    }

    #[must_use]
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn parse_power(base: &str, exponent: &str) -> Result<BigUint, SeedError> {
        let base = parse_decimal(base.trim())?;
        let exponent = parse_decimal(exponent.trim())?;
        let exp = exponent
            .to_u32()
            .filter(|exp| *exp <= Self::MAX_EXPONENT)
            .ok_or_else(|| SeedError::ExponentTooLarge {
                exponent: exponent.clone(),
            })?;
        Ok(base.pow(exp))
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(SeedError::Empty);
        }
        let value = if let Some((base, exponent)) = raw.split_once("**") {
            Self::parse_power(base, exponent)?
        } else if let Some((base, exponent)) = raw.split_once('^') {
            Self::parse_power(base, exponent)?
        } else {
            parse_decimal(raw)?
        };
        Self::new(value)
    }
}

impl From<Seed> for BigUint {
    fn from(value: Seed) -> Self {
        value.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepLimitError {
    #[error("step limit must be greater than zero")]
    Zero,
    #[error("invalid step limit: {0}")]
    Parse(#[from] ParseIntError),
}

/// Maximum number of steps a run may take.
///
/// Exhausting the limit is a normal outcome, not an error: the run reports
/// the last value reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepLimit(u64);

impl StepLimit {
    pub const DEFAULT: u64 = 1000;

    pub const fn new(steps: u64) -> Result<Self, StepLimitError> {
        if steps == 0 {
            return Err(StepLimitError::Zero);
        }
        Ok(Self(steps))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Default for StepLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u64> for StepLimit {
    type Error = StepLimitError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for StepLimit {
    type Err = StepLimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim().parse()?)
    }
}

impl fmt::Display for StepLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Positional numerals in bases 2, 3 and 10.
//!
//! [`DigitString`] is a proof type: construction validates every character
//! against the radix, so once you hold one you know it parses. The free
//! functions are the converter surface the engine works with.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Deref;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

mod sealed {
    pub trait Sealed {}
}

/// A positional base with single-character digits `'0'..`.
pub trait Radix:
    sealed::Sealed + Copy + Clone + fmt::Debug + PartialEq + Eq + Hash + 'static
{
    const BASE: u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ternary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal;

impl sealed::Sealed for Binary {}
impl sealed::Sealed for Ternary {}
impl sealed::Sealed for Decimal {}

impl Radix for Binary {
    const BASE: u32 = 2;
}

impl Radix for Ternary {
    const BASE: u32 = 3;
}

impl Radix for Decimal {
    const BASE: u32 = 10;
}

/// A digit string contained a character outside its base's digit set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDigitError {
    #[error("'{found}' at position {position} is not a base-{radix} digit")]
    OutOfRange {
        radix: u32,
        found: char,
        position: usize,
    },
    #[error("base-{radix} digit string must not be empty")]
    Empty { radix: u32 },
}

impl InvalidDigitError {
    #[must_use]
    pub fn radix(&self) -> u32 {
        match self {
            InvalidDigitError::OutOfRange { radix, .. } | InvalidDigitError::Empty { radix } => {
                *radix
            }
        }
    }
}

/// A validated base-`R` numeral, most-significant digit first.
///
/// # Invariants
///
/// - Never empty
/// - Every character is a digit of `R`
///
/// Leading zeros are permitted; values produced from integers are canonical
/// (no leading zeros, `"0"` for zero).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString<R: Radix> {
    digits: String,
    radix: PhantomData<R>,
}

pub type BinaryString = DigitString<Binary>;
pub type TernaryString = DigitString<Ternary>;
pub type DecimalString = DigitString<Decimal>;

impl<R: Radix> DigitString<R> {
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidDigitError> {
        let digits = value.into();
        if digits.is_empty() {
            return Err(InvalidDigitError::Empty { radix: R::BASE });
        }
        if let Some((position, found)) = digits
            .chars()
            .enumerate()
            .find(|(_, c)| c.to_digit(R::BASE).is_none())
        {
            return Err(InvalidDigitError::OutOfRange {
                radix: R::BASE,
                found,
                position,
            });
        }
        Ok(Self::from_validated(digits))
    }

    /// Canonical encoding of `n`.
    ///
    /// Digits are produced least-significant first by repeated
    /// remainder/divide, then reversed.
    #[must_use]
    pub fn from_value(n: &BigUint) -> Self {
        if n.is_zero() {
            return Self::from_validated("0".to_string());
        }
        let digits = n
            .to_radix_le(R::BASE)
            .into_iter()
            .rev()
            .map(|d| char::from(b'0' + d))
            .collect();
        Self::from_validated(digits)
    }

    pub(crate) fn from_validated(digits: String) -> Self {
        debug_assert!(!digits.is_empty());
        Self {
            digits,
            radix: PhantomData,
        }
    }

    #[must_use]
    pub fn value(&self) -> BigUint {
        self.digits.bytes().fold(BigUint::zero(), |acc, b| {
            acc * R::BASE + u32::from(b - b'0')
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.digits
    }

    /// Number of digits. Always at least one.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn ends_with_zero(&self) -> bool {
        self.digits.ends_with('0')
    }

    /// Strip every trailing `'0'`, dividing the value by the largest power
    /// of the base that divides it. Zero stays `"0"`.
    #[must_use]
    pub fn trim_trailing_zeros(&self) -> Self {
        let trimmed = self.digits.trim_end_matches('0');
        if trimmed.is_empty() {
            Self::from_validated("0".to_string())
        } else {
            Self::from_validated(trimmed.to_string())
        }
    }

    /// Append the digit `'1'` (valid in every base): `n -> n * base + 1`.
    #[must_use]
    pub fn with_trailing_one(mut self) -> Self {
        self.digits.push('1');
        self
    }
}

impl<R: Radix> fmt::Display for DigitString<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl<R: Radix> Deref for DigitString<R> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<R: Radix> AsRef<str> for DigitString<R> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<R: Radix> TryFrom<String> for DigitString<R> {
    type Error = InvalidDigitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<R: Radix> TryFrom<&str> for DigitString<R> {
    type Error = InvalidDigitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<R: Radix> FromStr for DigitString<R> {
    type Err = InvalidDigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<R: Radix> From<DigitString<R>> for String {
    fn from(value: DigitString<R>) -> Self {
        value.digits
    }
}

impl<R: Radix> From<&BigUint> for DigitString<R> {
    fn from(value: &BigUint) -> Self {
        Self::from_value(value)
    }
}

#[must_use]
pub fn to_binary_digits(n: &BigUint) -> BinaryString {
    BinaryString::from_value(n)
}

#[must_use]
pub fn to_ternary_digits(n: &BigUint) -> TernaryString {
    TernaryString::from_value(n)
}

#[must_use]
pub fn to_decimal_digits(n: &BigUint) -> DecimalString {
    DecimalString::from_value(n)
}

pub fn parse_binary(s: &str) -> Result<BigUint, InvalidDigitError> {
    BinaryString::new(s).map(|digits| digits.value())
}

pub fn parse_ternary(s: &str) -> Result<BigUint, InvalidDigitError> {
    TernaryString::new(s).map(|digits| digits.value())
}

pub fn parse_decimal(s: &str) -> Result<BigUint, InvalidDigitError> {
    DecimalString::new(s).map(|digits| digits.value())
}

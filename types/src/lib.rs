//! Core domain types for the L-Box engine.
//!
//! This crate contains pure domain types with no IO and no mutable state.
//! Everything here can be used from any layer of the application:
//!
//! - **`numeral`**: validated digit strings and base 2/3/10 conversion
//! - **`packing`**: the bit-pair reduction and its [`Mode`] selector
//! - **`seed`**: validated run inputs ([`Seed`], [`StepLimit`])

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

pub mod numeral;
pub mod packing;
pub mod seed;

pub use num_bigint::BigUint;

pub use numeral::{
    Binary, BinaryString, Decimal, DecimalString, DigitString, InvalidDigitError, Radix, Ternary,
    TernaryString, parse_binary, parse_decimal, parse_ternary, to_binary_digits,
    to_decimal_digits, to_ternary_digits,
};
pub use packing::{Mode, pack};
pub use seed::{Seed, SeedError, StepLimit, StepLimitError};

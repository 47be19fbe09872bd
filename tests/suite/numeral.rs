//! Numeral converter tests

use lbox_types::{
    BigUint, InvalidDigitError, parse_binary, parse_decimal, parse_ternary, to_binary_digits,
    to_decimal_digits, to_ternary_digits,
};
use num_traits::{One, Zero};

/// Deterministic spread of values across many magnitudes.
fn sample_values() -> Vec<BigUint> {
    let mut values = vec![BigUint::zero(), BigUint::one()];
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    for shift in 0..64u32 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        values.push(BigUint::from(state >> shift));
    }
    values.push(BigUint::from(3u32).pow(40));
    values.push(BigUint::from(10u32).pow(60) + BigUint::one());
    values
}

#[test]
fn binary_round_trip_law() {
    for n in sample_values() {
        assert_eq!(parse_binary(&to_binary_digits(&n)).unwrap(), n);
    }
}

#[test]
fn ternary_round_trip_law() {
    for n in sample_values() {
        assert_eq!(parse_ternary(&to_ternary_digits(&n)).unwrap(), n);
    }
}

#[test]
fn digits_agree_with_std_radix_formatting() {
    for n in sample_values() {
        assert_eq!(to_binary_digits(&n).as_str(), n.to_str_radix(2));
        assert_eq!(to_ternary_digits(&n).as_str(), n.to_str_radix(3));
        assert_eq!(to_decimal_digits(&n).as_str(), n.to_string());
        assert_eq!(parse_decimal(&n.to_string()).unwrap(), n);
    }
}

#[test]
fn zero_is_canonical() {
    assert_eq!(to_binary_digits(&BigUint::zero()).as_str(), "0");
    assert_eq!(to_ternary_digits(&BigUint::zero()).as_str(), "0");
}

#[test]
fn canonical_output_has_no_leading_zero() {
    for n in sample_values().into_iter().filter(|n| !n.is_zero()) {
        assert!(!to_binary_digits(&n).starts_with('0'));
        assert!(!to_ternary_digits(&n).starts_with('0'));
    }
}

#[test]
fn invalid_digit_reports_character_and_position() {
    let err = parse_ternary("1203").unwrap_err();
    assert_eq!(
        err,
        InvalidDigitError::OutOfRange {
            radix: 3,
            found: '3',
            position: 3
        }
    );
    assert_eq!(err.to_string(), "'3' at position 3 is not a base-3 digit");
    assert!(parse_binary("10b").is_err());
}

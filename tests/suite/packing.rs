//! Bit-pair packing tests

use lbox_types::{BinaryString, InvalidDigitError, Mode, pack, to_binary_digits};
use num_bigint::BigUint;

#[test]
fn documented_pair_examples() {
    assert_eq!(pack("11", Mode::A).unwrap().as_str(), "10");
    assert_eq!(pack("01", Mode::A).unwrap().as_str(), "1");
    assert_eq!(pack("01", Mode::AiParadox).unwrap().as_str(), "10");
}

#[test]
fn remainder_rule_over_real_values() {
    for n in (1u64..2_000).step_by(7) {
        let bits = to_binary_digits(&BigUint::from(n));
        if bits.len().is_multiple_of(2) {
            continue;
        }
        let last = bits.chars().last().unwrap();
        assert!(bits.pack(Mode::B).ends_with("10"), "{bits}");
        assert!(bits.pack(Mode::A).ends_with(last), "{bits}");
        assert!(bits.pack(Mode::AiParadox).ends_with(last), "{bits}");
    }
}

#[test]
fn modes_agree_without_01_pairs_or_remainder() {
    // No "01" pair and even length: all three modes pack identically.
    let bits = BinaryString::new("11100011").unwrap();
    let a = bits.pack(Mode::A);
    assert_eq!(a, bits.pack(Mode::B));
    assert_eq!(a, bits.pack(Mode::AiParadox));
    assert_eq!(a.as_str(), "101110");
}

#[test]
fn packed_output_is_a_valid_numeral() {
    let packed = pack("1101101", Mode::B).unwrap();
    assert_eq!(packed.as_str(), "101110");
    assert_eq!(packed.value(), BigUint::from(46u32));
}

#[test]
fn invalid_input_is_propagated() {
    assert!(matches!(
        pack("11x1", Mode::A),
        Err(InvalidDigitError::OutOfRange { found: 'x', position: 2, .. })
    ));
}

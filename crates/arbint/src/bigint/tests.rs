// Copyright 2025 Irreducible Inc.
use num_bigint::BigUint;
use proptest::prelude::*;

use super::*;
use crate::error::{Error, ErrorKind};

/// Builds a value from a sign flag and a magnitude given most significant word first.
fn from_sign_and_words(negative: bool, mag: &[u32]) -> BigInt {
	let mut encoded = Vec::with_capacity(mag.len() + 1);
	encoded.push(0);
	encoded.extend_from_slice(mag);
	let value = BigInt::from_twos_complement_words(&encoded).unwrap();
	if negative { value.negate() } else { value }
}

/// Converts to a `num_bigint::BigInt` for comparison.
fn to_num_bigint(value: &BigInt) -> num_bigint::BigInt {
	let sign = match value.sign() {
		Sign::Minus => num_bigint::Sign::Minus,
		Sign::NoSign => num_bigint::Sign::NoSign,
		Sign::Plus => num_bigint::Sign::Plus,
	};
	let lsw_first = value.magnitude().iter().rev().copied().collect();
	num_bigint::BigInt::from_biguint(sign, BigUint::new(lsw_first))
}

fn arb_bigint(max_words: usize) -> impl Strategy<Value = BigInt> {
	(any::<bool>(), prop::collection::vec(any::<u32>(), 0..=max_words))
		.prop_map(|(negative, mag)| from_sign_and_words(negative, &mag))
}

/// Values whose words cluster around the extremes, which stress carries and quotient estimates.
fn arb_edgy_bigint(max_words: usize) -> impl Strategy<Value = BigInt> {
	let word = prop_oneof![
		Just(0u32),
		Just(1u32),
		Just(0x7FFF_FFFFu32),
		Just(0x8000_0000u32),
		Just(u32::MAX),
		any::<u32>(),
	];
	(any::<bool>(), prop::collection::vec(word, 0..=max_words))
		.prop_map(|(negative, mag)| from_sign_and_words(negative, &mag))
}

#[test]
fn test_division_by_zero_for_every_sign() {
	for dividend in [BigInt::zero(), BigInt::from(17), BigInt::from(-17)] {
		assert_eq!(dividend.div_rem(&BigInt::zero()), Err(Error::DivisionByZero));
		assert_eq!(
			dividend.div_rem(&BigInt::zero()).unwrap_err().kind(),
			ErrorKind::DivisionByZero
		);
	}
}

#[test]
fn test_magnitude_is_normalized() {
	let value = from_sign_and_words(true, &[0, 0, 5]);
	assert_eq!(value.magnitude(), &[5]);
	assert!(from_sign_and_words(true, &[0, 0]).is_zero());
}

proptest! {
	#[test]
	fn prop_add_subtract(a in arb_edgy_bigint(12), b in arb_edgy_bigint(12)) {
		let (na, nb) = (to_num_bigint(&a), to_num_bigint(&b));
		prop_assert_eq!(to_num_bigint(&a.add(&b)), &na + &nb);
		prop_assert_eq!(to_num_bigint(&a.subtract(&b)), &na - &nb);
	}

	#[test]
	fn prop_multiply(a in arb_bigint(40), b in arb_bigint(40)) {
		prop_assert_eq!(to_num_bigint(&a.multiply(&b)), to_num_bigint(&a) * to_num_bigint(&b));
	}

	#[test]
	fn prop_multiply_karatsuba_sized(
		a in prop::collection::vec(any::<u32>(), 80..=170),
		b in prop::collection::vec(any::<u32>(), 80..=170),
		negative in any::<bool>(),
	) {
		let a = from_sign_and_words(negative, &a);
		let b = from_sign_and_words(false, &b);
		prop_assert_eq!(to_num_bigint(&a.multiply(&b)), to_num_bigint(&a) * to_num_bigint(&b));
	}

	#[test]
	fn prop_div_rem(a in arb_edgy_bigint(24), b in arb_edgy_bigint(10)) {
		prop_assume!(!b.is_zero());
		let (na, nb) = (to_num_bigint(&a), to_num_bigint(&b));
		let (q, r) = a.div_rem(&b).unwrap();
		prop_assert_eq!(to_num_bigint(&q), &na / &nb);
		prop_assert_eq!(to_num_bigint(&r), &na % &nb);
		prop_assert_eq!(q.multiply(&b).add(&r), a);
	}

	#[test]
	fn prop_shift(a in arb_bigint(8), n in 0usize..300) {
		let na = to_num_bigint(&a);
		prop_assert_eq!(to_num_bigint(&a.shift_left(n as isize)), &na << n);
		prop_assert_eq!(to_num_bigint(&a.shift_right(n as isize)), &na >> n);
		prop_assert_eq!(a.shift_left(-(n as isize)), a.shift_right(n as isize));
	}

	#[test]
	fn prop_compare(a in arb_edgy_bigint(4), b in arb_edgy_bigint(4)) {
		prop_assert_eq!(a.cmp(&b), to_num_bigint(&a).cmp(&to_num_bigint(&b)));
	}

	#[test]
	fn prop_to_i64(a in arb_edgy_bigint(3)) {
		let expected = i64::try_from(&to_num_bigint(&a)).ok();
		prop_assert_eq!(a.to_i64(), expected);
		if let Some(value) = expected {
			prop_assert_eq!(a.to_i64_wrapping(), value);
		}
	}

	#[test]
	fn prop_bit_length(a in arb_edgy_bigint(6)) {
		let na = to_num_bigint(&a);
		let expected = if a.is_negative() {
			(-na - 1u32).bits()
		} else {
			na.bits()
		};
		prop_assert_eq!(a.bit_length() as u64, expected);
	}

	#[test]
	fn prop_twos_complement_roundtrip(a in arb_edgy_bigint(6)) {
		let encoded = a.to_twos_complement_words();
		prop_assert_eq!(BigInt::from_twos_complement_words(&encoded).unwrap(), a);
	}

	#[test]
	fn prop_format_matches_num_bigint(a in arb_bigint(64), radix in 2u32..=36) {
		let expected = to_num_bigint(&a).to_str_radix(radix);
		prop_assert_eq!(a.to_str_radix(radix).unwrap(), expected);
	}

	#[test]
	fn prop_parse_matches_num_bigint(a in arb_bigint(64), radix in 2u32..=36) {
		let text = to_num_bigint(&a).to_str_radix(radix);
		prop_assert_eq!(BigInt::parse_radix(&text, radix).unwrap(), a.clone());
		prop_assert_eq!(BigInt::parse_radix(&text.to_uppercase(), radix).unwrap(), a);
	}
}

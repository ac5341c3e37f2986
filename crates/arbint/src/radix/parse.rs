// Copyright 2025 Irreducible Inc.
use std::str::FromStr;

use super::table::RadixInfo;
use crate::{
	bigint::{BigInt, Sign},
	consts::{DEFAULT_RADIX, WORD_SIZE_BITS},
	error::Error,
};

/// Computes `mag * multiplier + addend` in place.
///
/// `mag` is a fixed-size magnitude of which only the low `used` words can be nonzero. A carry
/// out of the top used word claims the next word and increments `used`.
fn mul_add_in_place(mag: &mut [u32], used: &mut usize, multiplier: u32, addend: u32) {
	let mut carry = addend as u64;
	for word in mag.iter_mut().rev().take(*used) {
		let product = *word as u64 * multiplier as u64 + carry;
		*word = product as u32;
		carry = product >> WORD_SIZE_BITS;
	}
	if carry != 0 {
		let top = mag.len() - *used - 1;
		mag[top] = carry as u32;
		*used += 1;
	}
}

/// Folds digit values, most significant first, into a machine integer.
fn chunk_value(digits: &[u8], radix: u32) -> u32 {
	digits
		.iter()
		.fold(0u32, |acc, &digit| acc * radix + digit as u32)
}

impl BigInt {
	/// Parses `text` as an integer in `radix`.
	///
	/// The text is an optional leading `-` or `+` followed by one or more digits. Digits above `9`
	/// are the letters `a` to `z` in either case.
	///
	/// Digits are consumed in chunks as long as the largest power of the radix that fits in a
	/// word, so the magnitude is updated with one multi-word multiply-add per chunk rather than
	/// per digit.
	///
	/// # Errors
	/// - [`Error::RadixOutOfRange`] unless `2 <= radix <= 36`
	/// - [`Error::EmptyInput`] if there are no digits
	/// - [`Error::InvalidDigit`] for any character that is not a digit in `radix`, including a
	///   second sign
	pub fn parse_radix(text: &str, radix: u32) -> Result<BigInt, Error> {
		let info = RadixInfo::get(radix)?;

		let (sign, body, sign_len) = match text.as_bytes().first() {
			Some(b'-') => (Sign::Minus, &text[1..], 1),
			Some(b'+') => (Sign::Plus, &text[1..], 1),
			_ => (Sign::Plus, text, 0),
		};
		if body.is_empty() {
			return Err(Error::EmptyInput);
		}

		let digits = body
			.chars()
			.enumerate()
			.map(|(i, c)| {
				c.to_digit(radix)
					.map(|d| d as u8)
					.ok_or(Error::InvalidDigit {
						digit: c,
						position: sign_len + i,
						radix,
					})
			})
			.collect::<Result<Vec<u8>, Error>>()?;

		let leading_zeros = digits.iter().take_while(|&&d| d == 0).count();
		let digits = &digits[leading_zeros..];
		if digits.is_empty() {
			return Ok(BigInt::zero());
		}

		let _scope = (digits.len() > info.digits_per_word)
			.then(|| tracing::trace_span!("parse radix", radix, digits = digits.len()).entered());

		let num_words = info.bits_per_digit() * digits.len() / WORD_SIZE_BITS + 1;
		let mut mag = vec![0u32; num_words];
		let mut used = 0;

		let first_len = match digits.len() % info.digits_per_word {
			0 => info.digits_per_word,
			partial => partial,
		};
		let (first, rest) = digits.split_at(first_len);
		mul_add_in_place(&mut mag, &mut used, 0, chunk_value(first, radix));
		for chunk in rest.chunks_exact(info.digits_per_word) {
			mul_add_in_place(&mut mag, &mut used, info.word_radix, chunk_value(chunk, radix));
		}

		Ok(BigInt::from_parts(sign, mag))
	}
}

impl FromStr for BigInt {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		BigInt::parse_radix(s, DEFAULT_RADIX)
	}
}

// Copyright 2025 Irreducible Inc.
use std::ops::{Mul, Neg};

use super::words;
use crate::{consts::WORD_SIZE_BITS, error::Error};

/// Sign of a [`BigInt`].
///
/// Variants are declared in ascending order so that comparing signs compares the values they
/// belong to whenever the signs differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
	/// Strictly negative.
	Minus,
	/// Zero.
	#[default]
	NoSign,
	/// Strictly positive.
	Plus,
}

impl Sign {
	/// Returns `-1`, `0` or `1`.
	pub fn signum(self) -> i32 {
		match self {
			Sign::Minus => -1,
			Sign::NoSign => 0,
			Sign::Plus => 1,
		}
	}
}

impl Neg for Sign {
	type Output = Sign;

	fn neg(self) -> Sign {
		match self {
			Sign::Minus => Sign::Plus,
			Sign::NoSign => Sign::NoSign,
			Sign::Plus => Sign::Minus,
		}
	}
}

impl Mul for Sign {
	type Output = Sign;

	fn mul(self, rhs: Sign) -> Sign {
		match (self, rhs) {
			(Sign::NoSign, _) | (_, Sign::NoSign) => Sign::NoSign,
			(lhs, rhs) if lhs == rhs => Sign::Plus,
			_ => Sign::Minus,
		}
	}
}

/// An immutable arbitrary-precision signed integer.
///
/// The value is held in sign-magnitude form:
///
/// - `mag` is the absolute value as 32-bit words, most significant word first
/// - `mag` never carries a leading zero word
/// - `mag` is empty if and only if `sign` is [`Sign::NoSign`]
///
/// Every constructor enforces these invariants, so equality and hashing can compare the fields
/// directly. Two's-complement form is only used transiently, see
/// [`BigInt::from_twos_complement_words`] and [`BigInt::word`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
	sign: Sign,
	mag: Vec<u32>,
}

impl BigInt {
	/// Zero.
	pub const ZERO: BigInt = BigInt {
		sign: Sign::NoSign,
		mag: Vec::new(),
	};

	/// Returns zero.
	pub fn zero() -> Self {
		Self::ZERO
	}

	/// Returns one.
	pub fn one() -> Self {
		Self {
			sign: Sign::Plus,
			mag: vec![1],
		}
	}

	/// Wraps a sign and a magnitude.
	///
	/// Leading zero words are stripped and a magnitude that ends up empty forces the sign to
	/// [`Sign::NoSign`] regardless of the requested sign.
	pub(crate) fn from_parts(sign: Sign, mut mag: Vec<u32>) -> Self {
		words::normalize(&mut mag);
		if mag.is_empty() {
			return Self::ZERO;
		}
		debug_assert!(sign != Sign::NoSign, "non-zero magnitude requires a sign");
		Self { sign, mag }
	}

	/// Builds a value from a 128-bit magnitude and a sign.
	pub(crate) fn from_u128_with_sign(sign: Sign, value: u128) -> Self {
		let mag = (0..4)
			.rev()
			.map(|i| (value >> (i * WORD_SIZE_BITS)) as u32)
			.collect();
		Self::from_parts(sign, mag)
	}

	/// Builds a value from a two's-complement encoded word array, most significant word first.
	///
	/// If the top bit of the first word is set the array encodes a negative number and is
	/// converted to its magnitude; otherwise leading zero words are stripped.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] if `words` is empty.
	pub fn from_twos_complement_words(words: &[u32]) -> Result<Self, Error> {
		let Some(&first) = words.first() else {
			return Err(Error::InvalidArgument {
				reason: "zero length word array",
			});
		};

		if (first as i32) < 0 {
			Ok(Self {
				sign: Sign::Minus,
				mag: words::make_positive(words),
			})
		} else {
			Ok(Self::from_parts(Sign::Plus, words.to_vec()))
		}
	}

	/// Returns the sign.
	pub fn sign(&self) -> Sign {
		self.sign
	}

	/// Returns `-1`, `0` or `1` according to the sign.
	pub fn signum(&self) -> i32 {
		self.sign.signum()
	}

	/// Returns the magnitude words, most significant first, with no leading zero word.
	pub fn magnitude(&self) -> &[u32] {
		&self.mag
	}

	/// Whether the value is zero.
	pub fn is_zero(&self) -> bool {
		self.sign == Sign::NoSign
	}

	/// Whether the value is strictly negative.
	pub fn is_negative(&self) -> bool {
		self.sign == Sign::Minus
	}

	/// Whether the value is strictly positive.
	pub fn is_positive(&self) -> bool {
		self.sign == Sign::Plus
	}

	/// Returns the value with its sign flipped. Zero is its own negation.
	pub fn negate(&self) -> Self {
		Self {
			sign: -self.sign,
			mag: self.mag.clone(),
		}
	}

	/// Returns the absolute value.
	pub fn abs(&self) -> Self {
		match self.sign {
			Sign::Minus => self.negate(),
			_ => self.clone(),
		}
	}

	pub(crate) fn into_negated(mut self) -> Self {
		self.sign = -self.sign;
		self
	}

	/// Index, counted from the least significant end, of the lowest non-zero magnitude word.
	fn first_nonzero_word(&self) -> usize {
		self.mag
			.iter()
			.rev()
			.position(|&w| w != 0)
			.unwrap_or(self.mag.len())
	}

	/// Returns word `n` of the infinite two's-complement representation, counting from the
	/// least significant word.
	///
	/// Words past the stored magnitude are sign extension: zero for non-negative values and
	/// all ones for negative values.
	pub fn word(&self, n: usize) -> u32 {
		if n >= self.mag.len() {
			return match self.sign {
				Sign::Minus => u32::MAX,
				_ => 0,
			};
		}

		let mag_word = self.mag[self.mag.len() - n - 1];
		match self.sign {
			Sign::Minus if n <= self.first_nonzero_word() => mag_word.wrapping_neg(),
			Sign::Minus => !mag_word,
			_ => mag_word,
		}
	}

	/// Returns the shortest two's-complement encoding of the value, most significant word first.
	///
	/// The output is accepted by [`BigInt::from_twos_complement_words`] and always holds at
	/// least one word.
	pub fn to_twos_complement_words(&self) -> Vec<u32> {
		let len = self.bit_length() / WORD_SIZE_BITS + 1;
		(0..len).rev().map(|n| self.word(n)).collect()
	}

	/// Returns the low 64 bits of the two's-complement representation.
	///
	/// Values outside the `i64` range wrap around silently, as a fixed-width cast would.
	pub fn to_i64_wrapping(&self) -> i64 {
		((self.word(1) as u64) << WORD_SIZE_BITS | self.word(0) as u64) as i64
	}

	/// Returns the value as an `i64`, or `None` if it does not fit.
	pub fn to_i64(&self) -> Option<i64> {
		(self.bit_length() < 64).then(|| self.to_i64_wrapping())
	}

	/// Minimal number of bits of the two's-complement representation, excluding the sign bit.
	///
	/// For non-negative values this is the position of the highest set bit plus one. Negative
	/// powers of two need one bit less than their magnitude, e.g. `-128` fits in 7 bits plus
	/// sign.
	pub fn bit_length(&self) -> usize {
		let Some(&top) = self.mag.first() else {
			return 0;
		};

		let mag_bit_length = (self.mag.len() - 1) * WORD_SIZE_BITS + words::bit_length_of_word(top);
		let is_pow2 = top.is_power_of_two() && self.mag[1..].iter().all(|&w| w == 0);
		if self.sign == Sign::Minus && is_pow2 {
			mag_bit_length - 1
		} else {
			mag_bit_length
		}
	}
}

macro_rules! impl_from_unsigned {
	($($t:ty),*) => {
		$(
			impl From<$t> for BigInt {
				fn from(value: $t) -> Self {
					BigInt::from_u128_with_sign(Sign::Plus, value as u128)
				}
			}
		)*
	};
}

macro_rules! impl_from_signed {
	($($t:ty),*) => {
		$(
			impl From<$t> for BigInt {
				fn from(value: $t) -> Self {
					let sign = if value < 0 { Sign::Minus } else { Sign::Plus };
					BigInt::from_u128_with_sign(sign, value.unsigned_abs() as u128)
				}
			}
		)*
	};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

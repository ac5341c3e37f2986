// Copyright 2025 Irreducible Inc.
use std::cmp::Ordering;

use super::{
	bigint::{BigInt, Sign},
	words,
};

impl BigInt {
	/// Returns `self + other`.
	#[allow(clippy::should_implement_trait)]
	pub fn add(&self, other: &BigInt) -> BigInt {
		if other.is_zero() {
			return self.clone();
		}
		if self.is_zero() {
			return other.clone();
		}
		if self.sign() == other.sign() {
			return BigInt::from_parts(self.sign(), words::add(self.magnitude(), other.magnitude()));
		}
		self.combine_opposite(other, other.sign())
	}

	/// Returns `self - other`.
	pub fn subtract(&self, other: &BigInt) -> BigInt {
		if other.is_zero() {
			return self.clone();
		}
		if self.is_zero() {
			return other.negate();
		}
		if self.sign() != other.sign() {
			return BigInt::from_parts(self.sign(), words::add(self.magnitude(), other.magnitude()));
		}
		self.combine_opposite(other, -other.sign())
	}

	/// Sums `self` with a value of magnitude `|other|` and sign `other_sign`, where
	/// `other_sign` is opposite to the sign of `self`.
	///
	/// The smaller magnitude is subtracted from the larger and the result takes the sign of
	/// whichever operand had the larger magnitude.
	fn combine_opposite(&self, other: &BigInt, other_sign: Sign) -> BigInt {
		match self.compare_magnitude(other) {
			Ordering::Equal => BigInt::zero(),
			Ordering::Greater => BigInt::from_parts(
				self.sign(),
				words::subtract(self.magnitude(), other.magnitude()),
			),
			Ordering::Less => {
				BigInt::from_parts(other_sign, words::subtract(other.magnitude(), self.magnitude()))
			}
		}
	}
}

// Copyright 2025 Irreducible Inc.
use std::cmp::Ordering;

use super::{
	bigint::{BigInt, Sign},
	words,
};

impl BigInt {
	/// Three-way comparison of two values.
	///
	/// Differing signs decide the result directly. Equal non-zero signs compare magnitudes,
	/// reversing the outcome for negative values.
	pub fn compare(&self, other: &BigInt) -> Ordering {
		match self.sign().cmp(&other.sign()) {
			Ordering::Equal => match self.sign() {
				Sign::Plus => self.compare_magnitude(other),
				Sign::Minus => other.compare_magnitude(self),
				Sign::NoSign => Ordering::Equal,
			},
			ordering => ordering,
		}
	}

	/// Compares absolute values.
	pub fn compare_magnitude(&self, other: &BigInt) -> Ordering {
		words::compare(self.magnitude(), other.magnitude())
	}
}

impl PartialOrd for BigInt {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for BigInt {
	fn cmp(&self, other: &Self) -> Ordering {
		self.compare(other)
	}
}

// Copyright 2025 Irreducible Inc.
use super::{bigint::BigInt, words};

impl BigInt {
	/// Returns `self * 2^n`; a negative `n` shifts right instead.
	///
	/// # Panics
	/// If the shifted magnitude cannot be allocated.
	pub fn shift_left(&self, n: isize) -> BigInt {
		if n >= 0 {
			self.shl_bits(n as usize)
		} else {
			self.shr_bits(n.unsigned_abs())
		}
	}

	/// Returns `floor(self / 2^n)`; a negative `n` shifts left instead.
	///
	/// Bits are discarded as if the value were stored in infinite two's complement, so negative
	/// values round toward negative infinity and shifting every bit out of a negative value leaves
	/// `-1`.
	pub fn shift_right(&self, n: isize) -> BigInt {
		if n >= 0 {
			self.shr_bits(n as usize)
		} else {
			self.shl_bits(n.unsigned_abs())
		}
	}

	pub(crate) fn shl_bits(&self, n: usize) -> BigInt {
		if n == 0 || self.is_zero() {
			return self.clone();
		}
		BigInt::from_parts(self.sign(), words::shift_left(self.magnitude(), n))
	}

	pub(crate) fn shr_bits(&self, n: usize) -> BigInt {
		if n == 0 || self.is_zero() {
			return self.clone();
		}
		let mut mag = words::shift_right(self.magnitude(), n);
		if self.is_negative() && words::any_low_bits_set(self.magnitude(), n) {
			mag = words::increment(mag);
		}
		BigInt::from_parts(self.sign(), mag)
	}
}

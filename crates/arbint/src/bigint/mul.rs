// Copyright 2025 Irreducible Inc.
use super::{
	bigint::{BigInt, Sign},
	words,
};
use crate::consts::{KARATSUBA_THRESHOLD, WORD_MASK, WORD_SIZE_BITS};

/// Multiply two magnitudes using the textbook algorithm.
///
/// Performs `O(x.len() * y.len())` word multiplications. Each partial product `x[i] * y[j]`
/// plus the word already accumulated at that position plus the incoming carry fits a `u64`:
/// the low half is stored and the high half carried into the next more significant position.
///
/// # Returns
/// Product with exactly `x.len() + y.len()` words; the top word may be zero.
pub fn textbook_mul(x: &[u32], y: &[u32]) -> Vec<u32> {
	let mut z = vec![0u32; x.len() + y.len()];
	for (i, &xi) in x.iter().enumerate().rev() {
		let mut carry = 0u64;
		for (j, &yj) in y.iter().enumerate().rev() {
			let k = i + j + 1;
			let product = xi as u64 * yj as u64 + z[k] as u64 + carry;
			z[k] = product as u32;
			carry = product >> WORD_SIZE_BITS;
		}
		z[i] = carry as u32;
	}
	z
}

/// Multiply a magnitude by a single word.
///
/// A power-of-two multiplier is turned into a left shift.
pub fn mul_by_word(x: &[u32], y: u32) -> Vec<u32> {
	if y.is_power_of_two() {
		return words::shift_left(x, y.trailing_zeros() as usize);
	}

	let mut z = vec![0u32; x.len() + 1];
	let mut carry = 0u64;
	for (zk, &xi) in z.iter_mut().rev().zip(x.iter().rev()) {
		let product = xi as u64 * y as u64 + carry;
		*zk = (product & WORD_MASK) as u32;
		carry = product >> WORD_SIZE_BITS;
	}
	z[0] = carry as u32;
	words::normalize(&mut z);
	z
}

/// Multiply two magnitudes using Karatsuba.
///
/// Whereas [`textbook_mul`] needs $O(n^2)$ word multiplications, this is asymptotically
/// $O(n^{log_2 3})$, though its larger constant factor only pays off for long operands.
///
/// With `x = xh * B + xl` and `y = yh * B + yl` for `B = 2^(32 * half)`:
///
/// `x * y = p1 * B^2 + (p3 - p1 - p2) * B + p2`
///
/// where `p1 = xh * yh`, `p2 = xl * yl` and `p3 = (xh + xl) * (yh + yl)`.
///
/// # Returns
/// Normalized product.
pub fn karatsuba_mul(x: &[u32], y: &[u32]) -> Vec<u32> {
	let half = x.len().max(y.len()).div_ceil(2);

	let (xh, xl) = split_lower_words(x, half);
	let (yh, yl) = split_lower_words(y, half);

	let p1 = multiply_magnitudes(xh, yh);
	let p2 = multiply_magnitudes(xl, yl);
	let p3 = multiply_magnitudes(&words::add(xh, xl), &words::add(yh, yl));

	let middle = words::subtract(&words::subtract(&p3, &p1), &p2);

	let shift = half * WORD_SIZE_BITS;
	let mut result = words::add(&words::shift_left(&p1, shift), &middle);
	words::normalize(&mut result);
	let mut result = words::add(&words::shift_left(&result, shift), &p2);
	words::normalize(&mut result);
	result
}

/// Splits a magnitude into the words above and the (normalized) `half` words below.
fn split_lower_words(mag: &[u32], half: usize) -> (&[u32], &[u32]) {
	if mag.len() <= half {
		(&[], words::strip_leading_zeros(mag))
	} else {
		let (upper, lower) = mag.split_at(mag.len() - half);
		(upper, words::strip_leading_zeros(lower))
	}
}

/// Multiply two magnitudes, picking the most efficient algorithm.
///
/// # Returns
/// Normalized product.
pub fn multiply_magnitudes(x: &[u32], y: &[u32]) -> Vec<u32> {
	if x.is_empty() || y.is_empty() {
		return Vec::new();
	}
	if y.len() == 1 {
		return mul_by_word(x, y[0]);
	}
	if x.len() == 1 {
		return mul_by_word(y, x[0]);
	}

	if x.len() < KARATSUBA_THRESHOLD || y.len() < KARATSUBA_THRESHOLD {
		let mut z = textbook_mul(x, y);
		words::normalize(&mut z);
		z
	} else {
		karatsuba_mul(x, y)
	}
}

impl BigInt {
	/// Returns `self * other`.
	pub fn multiply(&self, other: &BigInt) -> BigInt {
		if self.is_zero() || other.is_zero() {
			return BigInt::zero();
		}
		BigInt::from_parts(
			self.sign() * other.sign(),
			multiply_magnitudes(self.magnitude(), other.magnitude()),
		)
	}

	/// Returns `self * self`.
	pub fn square(&self) -> BigInt {
		if self.is_zero() {
			return BigInt::zero();
		}
		BigInt::from_parts(Sign::Plus, multiply_magnitudes(self.magnitude(), self.magnitude()))
	}

	/// Returns `self` raised to the power `exponent`, with `0^0 = 1`.
	pub fn pow(&self, mut exponent: u32) -> BigInt {
		let mut result = BigInt::one();
		let mut base = self.clone();
		while exponent != 0 {
			if exponent & 1 == 1 {
				result = result.multiply(&base);
			}
			exponent >>= 1;
			if exponent != 0 {
				base = base.square();
			}
		}
		result
	}
}

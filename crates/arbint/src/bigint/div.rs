// Copyright 2025 Irreducible Inc.
//! Long division of magnitudes.
//!
//! Multi-word divisors use Knuth's Algorithm D (TAOCP vol. 2, 4.3.1): both operands are
//! normalized so the top divisor word has its high bit set, then one quotient word is estimated
//! from the top words of the running remainder, corrected at most twice, and the scaled divisor is
//! multiplied and subtracted from the remainder. The rare over-estimate left after correction is
//! repaired by adding the divisor back once.

use std::cmp::Ordering;

use super::{bigint::BigInt, words};
use crate::{
	consts::{WORD_MASK, WORD_SIZE_BITS},
	error::Error,
};

/// Scratch magnitude owned by a single division.
///
/// The live words are `value[offset..offset + len]`, most significant first. Dropping leading
/// zero words only advances `offset`, so the backing storage is never moved while dividing.
#[derive(Debug)]
struct WorkingBuffer {
	value: Vec<u32>,
	offset: usize,
	len: usize,
}

impl WorkingBuffer {
	fn zeroed(len: usize) -> Self {
		Self {
			value: vec![0; len],
			offset: 0,
			len,
		}
	}

	/// Copies `words` shifted left by `shift < 32` bits, with one extra most significant word to
	/// hold the bits pushed out of the top.
	fn with_leading_slack(words: &[u32], shift: u32) -> Self {
		debug_assert!(shift < WORD_SIZE_BITS as u32);
		let mut buffer = Self::zeroed(words.len() + 1);
		let value = &mut buffer.value;
		if shift == 0 {
			value[1..].copy_from_slice(words);
		} else {
			let shift2 = WORD_SIZE_BITS as u32 - shift;
			value[0] = words[0] >> shift2;
			for (i, &word) in words.iter().enumerate() {
				let next = words.get(i + 1).map_or(0, |&w| w >> shift2);
				value[i + 1] = word << shift | next;
			}
		}
		buffer
	}

	fn as_mut_slice(&mut self) -> &mut [u32] {
		&mut self.value[self.offset..self.offset + self.len]
	}

	/// Skips leading zero words.
	fn normalize(&mut self) {
		let zeros = self.value[self.offset..self.offset + self.len]
			.iter()
			.take_while(|&&w| w == 0)
			.count();
		self.offset += zeros;
		self.len -= zeros;
	}

	/// Shifts the live words right by `shift < 32` bits in place.
	fn shift_right_bits(&mut self, shift: u32) {
		if shift != 0 && self.len != 0 {
			let shift2 = WORD_SIZE_BITS as u32 - shift;
			let live = self.as_mut_slice();
			for i in (1..live.len()).rev() {
				live[i] = live[i] >> shift | live[i - 1] << shift2;
			}
			live[0] >>= shift;
		}
		self.normalize();
	}

	fn into_magnitude(mut self) -> Vec<u32> {
		self.normalize();
		self.value.truncate(self.offset + self.len);
		self.value.drain(..self.offset);
		self.value
	}
}

/// Divides the two-word value `hi * 2^32 + lo` by `divisor`.
///
/// Requires `hi < divisor`, so the quotient fits in one word.
///
/// # Returns
/// `(quotient, remainder)`
fn div_wide(hi: u32, lo: u32, divisor: u32) -> (u32, u32) {
	debug_assert!(hi < divisor);
	let dividend = (hi as u64) << WORD_SIZE_BITS | lo as u64;
	let divisor = divisor as u64;
	((dividend / divisor) as u32, (dividend % divisor) as u32)
}

/// Divides a magnitude by a single nonzero word.
///
/// Walks from the most significant word down, dividing the running remainder concatenated with
/// the next word. The remainder left after the last word is the remainder of the whole division.
pub fn divide_one_word(dividend: &[u32], divisor: u32) -> (Vec<u32>, u32) {
	debug_assert_ne!(divisor, 0);
	let mut quotient = WorkingBuffer::zeroed(dividend.len());
	let mut rem = 0u32;
	for (q, &word) in quotient.as_mut_slice().iter_mut().zip(dividend) {
		let (q_word, r) = div_wide(rem, word, divisor);
		*q = q_word;
		rem = r;
	}
	(quotient.into_magnitude(), rem)
}

/// Estimates the next quotient word from the top three words of the remainder window and the top
/// two words of the normalized divisor.
///
/// The estimate is never too small and, after the correction loop, at most one too large.
fn estimate_quotient_word(nh: u32, nm: u32, nl: u32, dh: u64, dl: u64) -> u64 {
	let numerator = (nh as u64) << WORD_SIZE_BITS | nm as u64;
	let mut qhat = numerator / dh;
	let mut rhat = numerator % dh;
	while qhat > WORD_MASK || qhat * dl > (rhat << WORD_SIZE_BITS | nl as u64) {
		qhat -= 1;
		rhat += dh;
		if rhat > WORD_MASK {
			break;
		}
	}
	qhat
}

/// Subtracts `qhat * divisor` from the `divisor.len() + 1` word `window`.
///
/// When the estimate was one too large the window underflows; the divisor is added back and the
/// corrected quotient word returned.
fn multiply_subtract(window: &mut [u32], divisor: &[u32], qhat: u64) -> u32 {
	debug_assert_eq!(window.len(), divisor.len() + 1);

	let mut borrow = 0i64;
	for (w, &d) in window[1..].iter_mut().rev().zip(divisor.iter().rev()) {
		let product = qhat * d as u64;
		let t = *w as i64 - borrow - (product & WORD_MASK) as i64;
		*w = t as u32;
		borrow = (product >> WORD_SIZE_BITS) as i64 - (t >> WORD_SIZE_BITS);
	}
	let t = window[0] as i64 - borrow;
	window[0] = t as u32;
	if t >= 0 {
		return qhat as u32;
	}

	let mut carry = 0u64;
	for (w, &d) in window[1..].iter_mut().rev().zip(divisor.iter().rev()) {
		let sum = *w as u64 + d as u64 + carry;
		*w = sum as u32;
		carry = sum >> WORD_SIZE_BITS;
	}
	window[0] = window[0].wrapping_add(carry as u32);
	(qhat - 1) as u32
}

/// Divides `dividend` by a divisor of at least two words.
///
/// # Returns
/// Normalized `(quotient, remainder)`.
fn divide_knuth(dividend: &[u32], divisor: &[u32]) -> (Vec<u32>, Vec<u32>) {
	let n = divisor.len();
	debug_assert!(n >= 2 && dividend.len() >= n);

	let _scope = tracing::trace_span!(
		"Knuth division",
		dividend_words = dividend.len(),
		divisor_words = n
	)
	.entered();

	let shift = divisor[0].leading_zeros();
	let divisor = words::shift_left(divisor, shift as usize);
	debug_assert_eq!(divisor.len(), n);

	let mut remainder = WorkingBuffer::with_leading_slack(dividend, shift);
	let limit = remainder.len - n;
	let mut quotient = WorkingBuffer::zeroed(limit);

	let dh = divisor[0] as u64;
	let dl = divisor[1] as u64;
	let rem = remainder.as_mut_slice();
	let q = quotient.as_mut_slice();
	for j in 0..limit {
		let window = &mut rem[j..=j + n];
		let qhat = estimate_quotient_word(window[0], window[1], window[2], dh, dl);
		q[j] = multiply_subtract(window, &divisor, qhat);
	}

	remainder.normalize();
	remainder.shift_right_bits(shift);
	(quotient.into_magnitude(), remainder.into_magnitude())
}

/// Divides two magnitudes.
///
/// # Returns
/// Normalized `(quotient, remainder)` with `remainder < divisor`.
///
/// # Panics
/// In debug builds if `divisor` is empty.
pub fn div_rem_magnitudes(dividend: &[u32], divisor: &[u32]) -> (Vec<u32>, Vec<u32>) {
	debug_assert!(!divisor.is_empty(), "division by a zero magnitude");

	match words::compare(dividend, divisor) {
		Ordering::Less => return (Vec::new(), dividend.to_vec()),
		Ordering::Equal => return (vec![1], Vec::new()),
		Ordering::Greater => {}
	}

	if divisor.len() == 1 {
		let (quotient, rem) = divide_one_word(dividend, divisor[0]);
		let rem = if rem == 0 { Vec::new() } else { vec![rem] };
		return (quotient, rem);
	}

	divide_knuth(dividend, divisor)
}

impl BigInt {
	/// Truncating division returning both quotient and remainder.
	///
	/// The quotient is rounded toward zero and the remainder takes the sign of `self`, so
	/// `self == quotient * divisor + remainder` and `|remainder| < |divisor|`.
	///
	/// # Errors
	/// [`Error::DivisionByZero`] when `divisor` is zero, whatever the value of `self`.
	pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), Error> {
		if divisor.is_zero() {
			return Err(Error::DivisionByZero);
		}
		let (quotient, rem) = div_rem_magnitudes(self.magnitude(), divisor.magnitude());
		Ok((
			BigInt::from_parts(self.sign() * divisor.sign(), quotient),
			BigInt::from_parts(self.sign(), rem),
		))
	}

	/// Returns `self / divisor` rounded toward zero.
	pub fn divide(&self, divisor: &BigInt) -> Result<BigInt, Error> {
		self.div_rem(divisor).map(|(quotient, _)| quotient)
	}

	/// Returns `self % divisor`, which has the sign of `self`.
	pub fn remainder(&self, divisor: &BigInt) -> Result<BigInt, Error> {
		self.div_rem(divisor).map(|(_, rem)| rem)
	}
}

#[cfg(test)]
mod tests {
	use rand::{Rng, SeedableRng, rngs::StdRng};

	use super::*;
	use crate::bigint::mul::multiply_magnitudes;

	fn big(value: i128) -> BigInt {
		BigInt::from(value)
	}

	#[test]
	fn test_div_wide() {
		assert_eq!(div_wide(0, 25, 5), (5, 0));
		assert_eq!(div_wide(1, 0, 3), (0x5555_5555, 1));
		assert_eq!(div_wide(u32::MAX - 1, u32::MAX, u32::MAX), (u32::MAX, u32::MAX - 1));
	}

	#[test]
	fn test_working_buffer_window() {
		let mut buffer = WorkingBuffer::with_leading_slack(&[0x8000_0001, 2], 1);
		assert_eq!(buffer.as_mut_slice(), &[1, 2, 4]);
		buffer.shift_right_bits(1);
		assert_eq!(buffer.offset, 1);
		assert_eq!(buffer.into_magnitude(), vec![0x8000_0001, 2]);

		let mut empty = WorkingBuffer::zeroed(3);
		empty.shift_right_bits(7);
		assert_eq!(empty.len, 0);
		assert!(empty.into_magnitude().is_empty());
	}

	#[test]
	fn test_single_word_divisor() {
		let (q, r) = big(25).div_rem(&big(5)).unwrap();
		assert_eq!((q, r), (big(5), BigInt::zero()));

		let (q, r) = big(250_000_000).div_rem(&big(48)).unwrap();
		assert_eq!((q, r), (big(5_208_333), big(16)));

		assert_eq!(divide_one_word(&[7, 0, 3], 2), (vec![3, 0x8000_0000, 1], 1));
	}

	#[test]
	fn test_wide_dividend_by_small_divisor() {
		let dividend: BigInt = "5894082498674691308000005".parse().unwrap();
		let (q, r) = dividend.div_rem(&big(38594)).unwrap();
		assert_eq!(q.to_string(), "152720176677066158159");
		assert_eq!(r, big(11559));
	}

	#[test]
	fn test_small_dividend() {
		let (q, r) = big(3).div_rem(&big(1 << 70)).unwrap();
		assert!(q.is_zero());
		assert_eq!(r, big(3));

		let (q, r) = big(-(1 << 70)).div_rem(&big(1 << 70)).unwrap();
		assert_eq!((q, r), (big(-1), BigInt::zero()));
	}

	#[test]
	fn test_truncating_signs() {
		for (a, b) in [(7i128, 2i128), (-7, 2), (7, -2), (-7, -2), (1 << 100, -(1 << 40) - 3)] {
			let (q, r) = big(a).div_rem(&big(b)).unwrap();
			assert_eq!(q, big(a / b), "{a} / {b}");
			assert_eq!(r, big(a % b), "{a} % {b}");
		}
	}

	#[test]
	fn test_division_by_zero() {
		for value in [0i128, 1, -1, 1 << 80] {
			assert_eq!(big(value).div_rem(&BigInt::zero()), Err(Error::DivisionByZero));
			assert_eq!(big(value).divide(&BigInt::zero()), Err(Error::DivisionByZero));
			assert_eq!(big(value).remainder(&BigInt::zero()), Err(Error::DivisionByZero));
		}
	}

	#[test]
	fn test_knuth_add_back() {
		// These operands drive the estimated quotient word one past the true value, so the
		// multiply-subtract step underflows and the divisor has to be added back.
		let cases: [(&[u32], &[u32], &[u32], &[u32]); 3] = [
			(
				&[0x7fff_ffff, 0x8000_0000, 0x1, 0x8000_0000, 0x1],
				&[0x8000_0000, 0x7fff_ffff, 0x7fff_ffff],
				&[0xffff_fffe, 0x0000_0002],
				&[0x8000_0000, 0x7fff_ffff, 0x0000_0003],
			),
			(
				&[0x8000_0000, 0x0, 0x1, 0xffff_ffff, 0x1],
				&[0x8000_0000, 0x0, 0xffff_ffff],
				&[0xffff_ffff, 0xffff_fffe],
				&[0x3, 0x0, 0xffff_ffff],
			),
			(
				&[0x8000_0000, 0x7fff_ffff, 0x8000_0000, 0x0, 0x8000_0000, 0x8000_0000],
				&[0x8000_0000, 0x7fff_ffff, 0xffff_ffff, 0x7fff_ffff],
				&[0xffff_ffff, 0xffff_ffff],
				&[0x1, 0x1, 0x7fff_ffff, 0xffff_ffff],
			),
		];
		for (dividend, divisor, quotient, remainder) in cases {
			let (q, r) = div_rem_magnitudes(dividend, divisor);
			assert_eq!(q, quotient);
			assert_eq!(r, remainder);
		}
	}

	#[test]
	fn test_knuth_reconstructs_dividend() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..200 {
			let divisor_len = rng.random_range(2..12);
			let dividend_len = rng.random_range(divisor_len..divisor_len + 12);
			let mut divisor: Vec<u32> = (0..divisor_len).map(|_| rng.random()).collect();
			let mut dividend: Vec<u32> = (0..dividend_len).map(|_| rng.random()).collect();
			divisor[0] = divisor[0].max(1);
			dividend[0] = dividend[0].max(1);

			let (q, r) = div_rem_magnitudes(&dividend, &divisor);
			assert_eq!(words::compare(&r, &divisor), Ordering::Less);
			let mut rebuilt = words::add(&multiply_magnitudes(&q, &divisor), &r);
			words::normalize(&mut rebuilt);
			assert_eq!(rebuilt, dividend);
		}
	}
}

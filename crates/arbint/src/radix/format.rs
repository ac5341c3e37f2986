// Copyright 2025 Irreducible Inc.
use std::{f64::consts::LN_2, fmt};

use super::{cache::PowerCache, table::RadixInfo};
use crate::{
	bigint::{BigInt, div::div_rem_magnitudes, words},
	consts::{DEFAULT_RADIX, RADIX_CONVERSION_THRESHOLD, WORD_SIZE_BITS},
	error::Error,
};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn push_zeros(out: &mut String, count: usize) {
	out.extend(std::iter::repeat_n('0', count));
}

/// Writes the digits of `value` in `radix` to the tail of `buf` and returns them.
fn u64_digits(mut value: u64, radix: u32, buf: &mut [u8; 64]) -> &[u8] {
	let radix = radix as u64;
	let mut pos = buf.len();
	loop {
		pos -= 1;
		buf[pos] = DIGITS[(value % radix) as usize];
		value /= radix;
		if value == 0 {
			return &buf[pos..];
		}
	}
}

fn push_digits(out: &mut String, digits: &[u8]) {
	out.extend(digits.iter().map(|&b| b as char));
}

/// Formats a magnitude by repeated division by the largest power of the radix that fits in an
/// `i64`, one digit group per division.
///
/// Every group but the most significant is zero-padded to the full group width, and the whole
/// output is left-padded with zeros to at least `width` digits.
pub(crate) fn small_to_string(mag: &[u32], info: &RadixInfo, width: usize, out: &mut String) {
	if mag.is_empty() {
		push_zeros(out, width);
		return;
	}

	let divisor = info.long_radix_words();
	let mut groups = Vec::new();
	let mut rest = mag.to_vec();
	while !rest.is_empty() {
		let (quotient, group) = div_rem_magnitudes(&rest, &divisor);
		groups.push(group.iter().fold(0u64, |acc, &w| acc << WORD_SIZE_BITS | w as u64));
		rest = quotient;
	}

	let Some((&top, lower)) = groups.split_last() else {
		return;
	};
	let mut buf = [0u8; 64];
	let top = u64_digits(top, info.radix, &mut buf);
	let total = top.len() + lower.len() * info.digits_per_long;
	push_zeros(out, width.saturating_sub(total));
	push_digits(out, top);

	for &group in lower.iter().rev() {
		let digits = u64_digits(group, info.radix, &mut buf);
		push_zeros(out, info.digits_per_long - digits.len());
		push_digits(out, digits);
	}
}

/// Formats a magnitude by splitting it around `radix^(2^n)` and formatting both halves.
///
/// `n` is chosen so the cached power has about half as many digits as the value. The low half
/// is zero-padded to exactly `2^n` digits, the high half to whatever is left of `width`.
fn recursive_to_string(
	mag: &[u32],
	info: &RadixInfo,
	cache: &PowerCache,
	width: usize,
	out: &mut String,
) -> Result<(), Error> {
	if mag.len() < RADIX_CONVERSION_THRESHOLD {
		small_to_string(mag, info, width, out);
		return Ok(());
	}

	let bits = (mag.len() - 1) * WORD_SIZE_BITS + words::bit_length_of_word(mag[0]);
	let n = ((bits as f64 * LN_2 / info.ln()).log2() - 1.0).round() as usize;
	let power = cache.get(info.radix, n)?;

	let _scope =
		tracing::trace_span!("radix split", radix = info.radix, words = mag.len(), n).entered();

	let (high, low) = div_rem_magnitudes(mag, power.magnitude());
	let low_digits = 1usize << n;
	recursive_to_string(&high, info, cache, width.saturating_sub(low_digits), out)?;
	recursive_to_string(&low, info, cache, low_digits, out)
}

impl BigInt {
	/// Formats `self` in `radix` with lowercase letters for digits above `9` and a leading `-`
	/// when negative.
	///
	/// Magnitudes of [`RADIX_CONVERSION_THRESHOLD`] words or more are converted by recursive
	/// splitting around powers of the radix taken from [`PowerCache::global`].
	///
	/// # Errors
	/// [`Error::RadixOutOfRange`] unless `2 <= radix <= 36`.
	pub fn to_str_radix(&self, radix: u32) -> Result<String, Error> {
		self.to_str_radix_with_cache(radix, PowerCache::global())
	}

	/// Same as [`to_str_radix`](Self::to_str_radix) but takes powers of the radix from `cache`.
	pub fn to_str_radix_with_cache(&self, radix: u32, cache: &PowerCache) -> Result<String, Error> {
		let mut out = String::new();
		if self.is_negative() {
			out.push('-');
		}
		self.write_magnitude(radix, cache, &mut out)?;
		Ok(out)
	}

	fn write_magnitude(
		&self,
		radix: u32,
		cache: &PowerCache,
		out: &mut String,
	) -> Result<(), Error> {
		let info = RadixInfo::get(radix)?;
		if self.is_zero() {
			out.push('0');
			return Ok(());
		}
		recursive_to_string(self.magnitude(), info, cache, 0, out)
	}

	fn fmt_radix(
		&self,
		f: &mut fmt::Formatter<'_>,
		radix: u32,
		prefix: &str,
		uppercase: bool,
	) -> fmt::Result {
		let mut digits = String::new();
		self.write_magnitude(radix, PowerCache::global(), &mut digits)
			.map_err(|_| fmt::Error)?;
		if uppercase {
			digits.make_ascii_uppercase();
		}
		f.pad_integral(!self.is_negative(), prefix, &digits)
	}
}

impl fmt::Display for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.fmt_radix(f, DEFAULT_RADIX, "", false)
	}
}

impl fmt::LowerHex for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.fmt_radix(f, 16, "0x", false)
	}
}

impl fmt::UpperHex for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.fmt_radix(f, 16, "0x", true)
	}
}

impl fmt::Octal for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.fmt_radix(f, 8, "0o", false)
	}
}

impl fmt::Binary for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.fmt_radix(f, 2, "0b", false)
	}
}
